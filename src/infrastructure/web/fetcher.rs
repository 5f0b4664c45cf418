use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::ExtractionConfig;

/// Errors raised while downloading a listing page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Trait for retrieving the raw HTML of a listing page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP fetcher with a browser-looking user agent
pub struct HttpPageFetcher {
    http: Client,
    user_agent: String,
    timeout: Duration,
}

impl HttpPageFetcher {
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            http: Client::new(),
            user_agent: config.user_agent.clone(),
            timeout: config.fetch_timeout,
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "Downloading listing page");
        let wrap = |source: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            source,
        };

        self.http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(wrap)?
            .error_for_status()
            .map_err(wrap)?
            .text()
            .await
            .map_err(wrap)
    }
}

static BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<body\b[^>]*>.*</body>").unwrap());

/// Slice the `<body>` element out of a page, tags included. Keeps the
/// extraction prompt below the head's script and style noise. Pages
/// without a body tag are passed through whole.
pub fn slice_body(html: &str) -> &str {
    match BODY_RE.find(html) {
        Some(found) => found.as_str(),
        None => html,
    }
}
