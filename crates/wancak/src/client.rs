//! High-level client: build the page URL, fetch it, extract.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::extract::{parse_listing, parse_post};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::types::{Post, Posts, Section};
use crate::urls::{normalize_base, post_url, search_url, section_url};

/// Scraper for one site root.
pub struct Wancak<F: Fetcher = HttpFetcher> {
    base: String,
    fetcher: F,
}

impl Wancak<HttpFetcher> {
    /// Build an HTTP-backed client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = config.resolved_base()?;
        let fetcher = HttpFetcher::with_user_agent(config.timeout_ms, &config.user_agent)?;
        Ok(Self { base, fetcher })
    }
}

impl<F: Fetcher> Wancak<F> {
    /// Build a client around any fetcher. The base is used verbatim apart
    /// from trailing slashes.
    pub fn with_fetcher(base_url: &str, fetcher: F) -> Self {
        Self {
            base: normalize_base(base_url).to_string(),
            fetcher,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Posts of a section given by slug (`lol`, `trend`, `recent`,
    /// `legendary`). `page` is the cursor from a previous page's `next`.
    ///
    /// Unknown slugs fail before any request is made.
    pub async fn section_posts(&self, section: &str, page: Option<&str>) -> Result<Posts> {
        let section: Section = section.parse()?;
        self.section(section, page).await
    }

    pub async fn section(&self, section: Section, page: Option<&str>) -> Result<Posts> {
        self.listing(section_url(&self.base, section, page)).await
    }

    /// Search posts by keyword.
    pub async fn search(&self, query: &str, page: Option<&str>) -> Result<Posts> {
        self.listing(search_url(&self.base, query, page)).await
    }

    /// A post by id. An empty id returns a random post.
    pub async fn post(&self, id: &str) -> Result<Post> {
        let url = post_url(&self.base, id);
        let html = self.fetch(&url).await?;
        parse_post(&html, &self.base)
    }

    pub async fn random_post(&self) -> Result<Post> {
        self.post("").await
    }

    async fn listing(&self, url: String) -> Result<Posts> {
        let html = self.fetch(&url).await?;
        parse_listing(&html, &self.base)
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching page");
        self.fetcher.fetch(url).await.map_err(|e| {
            tracing::warn!(url, error = %e, "error getting web page");
            e
        })
    }
}
