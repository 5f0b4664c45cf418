//! Model types - Request, Response, and Error types

use crate::types::{ChatMessage, MessageRole};
use reqwest::StatusCode;
use thiserror::Error;

/// Model request for LLM chat
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Model response from LLM
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub message: ChatMessage,
}

impl ModelResponse {
    pub fn new(content: String) -> Self {
        Self {
            message: ChatMessage::new(MessageRole::Assistant, content),
        }
    }
}

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("the extraction service requires an API key")]
    MissingApiKey,
    #[error("network error calling the extraction service: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("the extraction service returned an invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl ModelError {
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Short description suitable for user-facing replies
    pub fn user_message(&self) -> String {
        match self {
            ModelError::MissingApiKey => {
                "The extraction service has no API key configured.".to_string()
            }
            ModelError::Network { source } => {
                if source.is_connect() {
                    "Could not connect to the extraction service.".to_string()
                } else if source.is_timeout() {
                    "The extraction service took too long to respond.".to_string()
                } else if let Some(status) = source.status() {
                    match status {
                        StatusCode::NOT_FOUND => {
                            "The extraction service endpoint was not found.".to_string()
                        }
                        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                            "The extraction service is currently unavailable.".to_string()
                        }
                        _ => format!(
                            "The extraction service request failed: {}",
                            status.as_u16()
                        ),
                    }
                } else {
                    "A network error occurred while calling the extraction service.".to_string()
                }
            }
            ModelError::InvalidResponse { .. } => {
                "The extraction service returned an invalid response.".to_string()
            }
        }
    }
}
