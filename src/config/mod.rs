pub mod app;
pub mod chat;
pub mod error;
pub mod extraction;
pub mod loader;
pub mod provider;
pub mod rest;

/// Default config file path - can be overridden via CLI argument
pub use crate::constants::CONFIG_PATH;

pub use app::AppConfig;
pub use chat::ChatConfig;
pub use error::ConfigError;
pub use extraction::ExtractionConfig;
pub use provider::ProviderConfig;
pub use rest::RestConfig;
