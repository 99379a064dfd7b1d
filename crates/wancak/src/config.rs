//! Client configuration and environment resolution.

use crate::error::{Result, WancakError};
use crate::fetch::DEFAULT_USER_AGENT;
use crate::urls::{normalize_base, BASE_URL};

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_BASE_URL: &str = "WANCAK_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "WANCAK_TIMEOUT_MS";

/// Settings for [`crate::Wancak`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `WANCAK_BASE_URL` and `WANCAK_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Overlay values from a lookup function. Unparseable timeouts are ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.base_url = base;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_MS).and_then(|v| v.trim().parse().ok()) {
            self.timeout_ms = timeout;
        }
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Check the base URL and return it without trailing slashes.
    pub fn resolved_base(&self) -> Result<String> {
        let base = normalize_base(self.base_url.trim());
        let parsed =
            url::Url::parse(base).map_err(|e| WancakError::InvalidUrl(format!("{base}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(WancakError::InvalidUrl(format!(
                "{base}: unsupported scheme {}",
                parsed.scheme()
            )));
        }
        Ok(base.to_string())
    }
}
