//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::traits::ModelProvider;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

/// Gemini client for Google AI
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    api_path: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.clone(),
            api_path: config.api_path().to_string(),
            api_key: config.resolved_api_key(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_model_url(&self, model: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        format!("{base}/{}/{model}:generateContent", self.api_path)
    }

    fn require_api_key(&self) -> Result<&str, ModelError> {
        self.api_key.as_deref().ok_or(ModelError::MissingApiKey)
    }
}

#[async_trait]
impl ModelProvider for GeminiClient {
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.build_model_url(&request.model);
        let contents = MessageAdapter::to_gemini_format(&request.messages);
        let payload = json!({ "contents": contents });

        let api_key = self.require_api_key()?;
        let url_with_key = format!("{url}?key={api_key}");

        info!(
            model = request.model.as_str(),
            messages = request.messages.len(),
            "Sending request to Gemini"
        );

        let response: GeminiResponse = self
            .http
            .post(&url_with_key)
            .json(&payload)
            .send()
            .await
            .map_err(ModelError::network)?
            .error_for_status()
            .map_err(ModelError::network)?
            .json()
            .await
            .map_err(ModelError::network)?;
        debug!("Received response from Gemini");

        let content = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .flat_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .ok_or_else(|| ModelError::invalid_response("missing text"))?;

        Ok(ModelResponse::new(content))
    }
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
