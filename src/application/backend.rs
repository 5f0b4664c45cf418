//! Chat backend client used by the terminal screen

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while talking to the chat backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to the chat backend failed: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("the chat backend returned an unexpected reply: {source}")]
    InvalidReply {
        #[source]
        source: reqwest::Error,
    },
}

impl BackendError {
    /// Short description suitable for the chat transcript
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Network { source } => {
                if source.is_connect() {
                    "Could not connect to the chat backend.".to_string()
                } else if source.is_timeout() {
                    "The chat backend took too long to respond.".to_string()
                } else {
                    "A network error occurred while talking to the chat backend.".to_string()
                }
            }
            BackendError::InvalidReply { .. } => {
                "The chat backend reply could not be understood.".to_string()
            }
        }
    }
}

#[derive(Serialize)]
struct OutboundMessage<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct BotReply {
    response: String,
}

/// HTTP client for the `/chat` and `/reset` endpoints
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one chat message and return the reply text. The reply body
    /// is parsed regardless of HTTP status; any body without a
    /// `response` field counts as an invalid reply.
    pub async fn send(&self, message: &str) -> Result<String, BackendError> {
        let url = format!("{}/chat", self.base_url);
        debug!(url = url.as_str(), "Sending chat message");

        let response = self
            .http
            .post(&url)
            .json(&OutboundMessage { message })
            .send()
            .await
            .map_err(|source| BackendError::Network { source })?;

        let reply: BotReply = response
            .json()
            .await
            .map_err(|source| BackendError::InvalidReply { source })?;
        Ok(reply.response)
    }

    /// Start the backend conversation over
    pub async fn reset(&self) -> Result<(), BackendError> {
        let url = format!("{}/reset", self.base_url);
        debug!(url = url.as_str(), "Resetting backend conversation");

        self.http
            .post(&url)
            .send()
            .await
            .map_err(|source| BackendError::Network { source })?
            .error_for_status()
            .map_err(|source| BackendError::Network { source })?;
        Ok(())
    }
}
