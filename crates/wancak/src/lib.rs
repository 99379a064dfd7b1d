//! Wancak — scraper for 1cak.com section listings, search results, and posts.
//!
//! The site has no public API, so pages are fetched as HTML and the post
//! blocks, vote counters, and pagination links are read straight from the
//! markup.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod types;
pub mod urls;

pub use client::Wancak;
pub use config::ClientConfig;
pub use error::{Result, WancakError};
pub use extract::{is_not_found, next_page_cursor, parse_listing, parse_post};
pub use fetch::{Fetcher, HttpFetcher};
pub use types::*;
pub use urls::BASE_URL;
