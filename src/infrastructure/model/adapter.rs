//! Message adapters - convert between different API formats

use crate::types::{ChatMessage, MessageRole};
use serde_json::{Value, json};

/// Adapter for converting conversation history to provider wire formats
pub struct MessageAdapter;

impl MessageAdapter {
    /// Convert messages to Gemini `contents` entries.
    /// Assistant turns use the `model` role per the Gemini API.
    pub fn to_gemini_format(messages: &[ChatMessage]) -> Vec<Value> {
        messages
            .iter()
            .map(|message| {
                let role = match message.role {
                    MessageRole::User => "user",
                    MessageRole::Assistant => "model",
                };
                json!({
                    "role": role,
                    "parts": [{"text": message.content.clone()}]
                })
            })
            .collect()
    }
}
