//! Provider seam for the extraction model

use super::types::{ModelError, ModelRequest, ModelResponse};
use async_trait::async_trait;

/// A chat-completion backend the extraction assistant can call.
/// The assistant needs exactly one operation from a model; tests
/// plug in scripted doubles through this trait.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Answer one chat request, prior turns included in the request
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}
