use serde::Deserialize;
use std::net::SocketAddr;

use crate::constants::DEFAULT_BIND_ADDR;

/// REST server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestConfig {
    /// Socket address the server binds to
    pub bind: SocketAddr,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_BIND_ADDR is a valid literal
            bind: DEFAULT_BIND_ADDR.parse().unwrap(),
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct RawRest {
    pub(super) bind: Option<String>,
    #[serde(default)]
    pub(super) cors_origins: Vec<String>,
}
