//! Core data types for scraped posts and listing pages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WancakError;

/// A single post as scraped from a listing block or a post page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub url: String,
    pub img: String,
    /// Vote count exactly as rendered by the site.
    pub votes: String,
    pub nsfw: bool,
}

/// Pagination cursor of a listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Post id to pass as `page` when requesting the following page.
    pub next: String,
}

/// One page of a section listing or search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posts {
    pub page: Page,
    pub posts: Vec<Post>,
}

impl Posts {
    /// Return the number of posts on this page.
    pub fn count(&self) -> usize {
        self.posts.len()
    }

    /// Whether the page carried no post blocks.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Listing sections served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "lol")]
    Hot,
    #[serde(rename = "trend")]
    Trending,
    #[serde(rename = "recent")]
    Vote,
    #[serde(rename = "legendary")]
    Legendary,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hot,
        Section::Trending,
        Section::Vote,
        Section::Legendary,
    ];

    /// URL path segment for this section.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Hot => "lol",
            Section::Trending => "trend",
            Section::Vote => "recent",
            Section::Legendary => "legendary",
        }
    }

    /// Name the site shows for this section.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hot => "Hot",
            Section::Trending => "Trending",
            Section::Vote => "Vote",
            Section::Legendary => "Legend",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = WancakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| WancakError::InvalidSection(s.to_string()))
    }
}
