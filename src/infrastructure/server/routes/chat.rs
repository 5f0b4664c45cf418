use super::super::dto::{ErrorResponse, RestChatRequest, RestChatResponse};
use super::super::state::ServerState;
use crate::infrastructure::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = RestChatRequest,
    responses(
        (status = 200, description = "Reply to the chat message", body = RestChatResponse),
        (status = 400, description = "Empty message", body = ErrorResponse)
    )
)]
pub async fn chat_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    Json(payload): Json<RestChatRequest>,
) -> Result<Json<RestChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let exchange = Uuid::new_v4();
    info!(
        %exchange,
        chars = payload.message.len(),
        "Received /chat request"
    );

    if payload.message.trim().is_empty() {
        error!(%exchange, "Rejecting /chat request due to empty message");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "message cannot be empty".to_string(),
            }),
        ));
    }

    let response = state.assistant().handle(&payload.message).await;
    info!(%exchange, chars = response.len(), "Chat request completed");
    Ok(Json(RestChatResponse { response }))
}
