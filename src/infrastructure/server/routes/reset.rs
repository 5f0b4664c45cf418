use super::super::dto::RestChatResponse;
use super::super::state::ServerState;
use crate::infrastructure::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::info;

#[utoipa::path(
    post,
    path = "/reset",
    tag = "chat",
    responses(
        (status = 200, description = "Conversation restarted", body = RestChatResponse)
    )
)]
pub async fn reset_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
) -> Json<RestChatResponse> {
    info!("Received /reset request");
    state.assistant().reset().await;
    Json(RestChatResponse {
        response: "Conversation restarted. Send a listing URL to begin.".to_string(),
    })
}
