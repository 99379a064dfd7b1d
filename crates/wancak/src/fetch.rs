//! Page fetching over HTTP.
//!
//! Not a browser, just GET requests. One attempt per page: no retry, no
//! backoff, no caching.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Browser user agent sent with every request. The site serves the same
/// markup to it as to desktop Chrome.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/131.0.0.0 Safari/537.36";

/// Source of page bodies for the client.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return the response body as text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// `reqwest`-backed fetcher.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default user agent.
    pub fn new(timeout_ms: u64) -> Result<Self> {
        Self::with_user_agent(timeout_ms, DEFAULT_USER_AGENT)
    }

    /// Create a fetcher with a custom user agent.
    pub fn with_user_agent(timeout_ms: u64, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    /// The body is returned for any status so error pages still reach the
    /// not-found check.
    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "non-success status");
        }
        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_creation() {
        assert!(HttpFetcher::new(10_000).is_ok());
        assert!(HttpFetcher::with_user_agent(500, "wancak-test/1.0").is_ok());
    }

    #[test]
    fn test_default_user_agent_is_single_line() {
        assert!(!DEFAULT_USER_AGENT.contains('\n'));
        assert!(DEFAULT_USER_AGENT.starts_with("Mozilla/5.0"));
    }
}
