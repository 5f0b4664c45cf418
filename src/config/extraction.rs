use serde::Deserialize;
use std::time::Duration;

use crate::constants::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PAGE_SIZE, DEFAULT_USER_AGENT};

/// Tuning for the listing-page extraction loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Resorts requested per batch; also the paging stride for CONTINUE
    pub page_size: usize,
    /// User agent sent when downloading listing pages
    pub user_agent: String,
    /// Timeout for a single page download
    pub fetch_timeout: Duration,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct RawExtraction {
    pub(super) page_size: Option<usize>,
    pub(super) user_agent: Option<String>,
    pub(super) fetch_timeout_secs: Option<u64>,
}

impl From<RawExtraction> for ExtractionConfig {
    fn from(raw: RawExtraction) -> Self {
        let defaults = ExtractionConfig::default();
        Self {
            page_size: raw.page_size.unwrap_or(defaults.page_size),
            user_agent: raw.user_agent.unwrap_or(defaults.user_agent),
            fetch_timeout: raw
                .fetch_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
        }
    }
}
