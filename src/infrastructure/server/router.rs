use super::docs::ApiDoc;
use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use crate::application::Assistant;
use crate::config::RestConfig;
use crate::infrastructure::model::ModelProvider;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::post;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn build_router<P>(assistant: Arc<Assistant<P>>, config: &RestConfig) -> Router
where
    P: ModelProvider + 'static,
{
    let api = ApiDoc::openapi();
    let state = Arc::new(ServerState::new(assistant));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", api))
        .route("/chat", post(routes::chat::chat_handler::<P>))
        .route("/reset", post(routes::reset::reset_handler::<P>))
        .layer(cors_layer(config))
        .with_state(state)
}

fn cors_layer(config: &RestConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(origin, %err, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(Any)
}

pub(super) async fn serve<P>(
    assistant: Arc<Assistant<P>>,
    config: RestConfig,
) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    let addr = config.bind;
    info!(%addr, "Binding REST server");
    let app = build_router(assistant, &config);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}
