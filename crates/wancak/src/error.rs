//! Error types for fetching and parsing pages.

/// All errors that can occur while scraping.
#[derive(thiserror::Error, Debug)]
pub enum WancakError {
    #[error("Post not found")]
    NotFound,

    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Next page link missing or malformed: {0:?}")]
    MissingNextPage(String),

    #[error("Post URL has no id segment: {0:?}")]
    MalformedPostUrl(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl WancakError {
    /// Whether the site reported the requested page as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WancakError::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, WancakError>;
