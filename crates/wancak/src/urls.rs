//! Request URL construction for sections, search, and single posts.

use url::form_urlencoded;

use crate::types::Section;

/// Default site root.
pub const BASE_URL: &str = "https://1cak.com";

/// Strip trailing slashes so paths can be appended with a single `/`.
pub fn normalize_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// `{base}/{slug}` for the first page, `{base}/{slug}-{page}` after that.
pub fn section_url(base: &str, section: Section, page: Option<&str>) -> String {
    match page {
        Some(page) => format!("{base}/{}-{page}", section.slug()),
        None => format!("{base}/{}", section.slug()),
    }
}

/// Search listing URL. The first page uses cursor `0`.
pub fn search_url(base: &str, query: &str, page: Option<&str>) -> String {
    let page = page.unwrap_or("0");
    format!("{base}/search-{page}-{}", escape_query(query))
}

/// Post page URL. An empty id asks the site for a random post.
pub fn post_url(base: &str, id: &str) -> String {
    if id.is_empty() {
        format!("{base}/shuffle")
    } else {
        format!("{base}/{id}")
    }
}

/// Form-style escaping: spaces become `+`, reserved bytes are percent-encoded.
pub fn escape_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}
