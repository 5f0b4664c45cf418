use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RestChatRequest {
    /// Raw text the user typed, whitespace included
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestChatResponse {
    /// Assistant reply, HTML fragments included
    pub response: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
