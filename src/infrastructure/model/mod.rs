//! Model provider integration

pub mod adapter;
pub mod gemini;
pub mod traits;
pub mod types;

pub use adapter::MessageAdapter;
pub use gemini::GeminiClient;
pub use traits::ModelProvider;
pub use types::{ModelError, ModelRequest, ModelResponse};
