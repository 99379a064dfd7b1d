//! Extract posts and pagination cursors from raw 1cak HTML.
//!
//! Listing pages (sections and search results) render each post as its own
//! `<table>` block; single post pages carry one post plus a Facebook comments
//! widget whose `data-href` is the canonical post URL. Everything here is
//! synchronous because `scraper::Html` is `!Send`. Async callers parse after
//! the body has been fetched.
//!
//! Text is read the way the site's markup is meant to be read: the text of a
//! selection is the concatenation of every matched element's text, untrimmed,
//! and an attribute of a selection comes from its first match (empty when
//! there is none).

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, WancakError};
use crate::types::{Page, Post, Posts};

/// `src` of the image the site shows in place of missing content.
pub const NOT_FOUND_IMAGE: &str = "templates/v1/img/error.png";

/// Placeholder served instead of NSFW images on post pages.
pub const UNSAVE_IMAGE_PATH: &str = "/images/unsave.jpg";

/// Images hosted on the CDN are absolute `https://` URLs. Anything else is a
/// site-relative path, which the site only emits for NSFW posts.
const SAFE_IMAGE_PREFIX: &str = "https://";

const VOTE_ID_PREFIX: &str = "span_vote_";

// ── Compiled selectors ──────────────────────────────────────────────────────

struct Selectors {
    not_found: Selector,
    table: Selector,
    upper_span: Selector,
    heading: Selector,
    img: Selector,
    titled_img: Selector,
    next_page_link: Selector,
    fb_comments: Selector,
    with_id: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        let parse = |css: &str| Selector::parse(css).expect("static selector is valid CSS");
        Selectors {
            not_found: parse(format!(r#"img[src="{NOT_FOUND_IMAGE}"]"#).as_str()),
            table: parse("table"),
            upper_span: parse(".upperSpan"),
            heading: parse("h3"),
            img: parse("img"),
            titled_img: parse("img[title]"),
            next_page_link: parse("#next_page_link"),
            fb_comments: parse(".fb-comments"),
            with_id: parse("[id]"),
        }
    })
}

// ── Public API ──────────────────────────────────────────────────────────────

/// Whether the page is the site's "not found" page.
pub fn is_not_found(document: &Html) -> bool {
    document.select(&selectors().not_found).next().is_some()
}

/// Parse a section or search listing page.
///
/// Every `<table>` whose first `.upperSpan` carries a non-empty `rel` becomes
/// a post, in document order. The page must have a `#next_page_link` whose
/// `href` yields a cursor.
pub fn parse_listing(html: &str, base: &str) -> Result<Posts> {
    let document = Html::parse_document(html);
    if is_not_found(&document) {
        return Err(WancakError::NotFound);
    }

    let s = selectors();
    let posts: Vec<Post> = document
        .select(&s.table)
        .filter_map(|block| parse_listing_block(block, base))
        .collect();

    let href = first_attr(document.select(&s.next_page_link), "href");
    let next = next_page_cursor(href)?;

    tracing::debug!(posts = posts.len(), next = %next, "parsed listing page");

    Ok(Posts {
        page: Page { next },
        posts,
    })
}

/// Parse a single post page (`/{id}` or `/shuffle`).
pub fn parse_post(html: &str, base: &str) -> Result<Post> {
    let document = Html::parse_document(html);
    if is_not_found(&document) {
        return Err(WancakError::NotFound);
    }

    let s = selectors();
    let url = first_attr(document.select(&s.fb_comments), "data-href").to_string();
    let id = url
        .split('/')
        .nth(3)
        .ok_or_else(|| WancakError::MalformedPostUrl(url.clone()))?
        .to_string();

    let title = text_of(document.select(&s.heading));
    let src = first_attr(document.select(&s.titled_img), "src");
    let (img, nsfw) = classify_post_image(src, base);
    let votes = text_of(
        document
            .select(&s.with_id)
            .filter(|el| is_vote_counter(el, &id)),
    );

    tracing::debug!(id = %id, nsfw, "parsed post page");

    Ok(Post {
        id,
        title,
        url,
        img,
        votes,
        nsfw,
    })
}

/// Derive the next-page cursor from a `#next_page_link` href.
///
/// Hrefs look like `/lol-12345` or `search-7-query`; the cursor is the second
/// `-`-separated part.
pub fn next_page_cursor(href: &str) -> Result<String> {
    href.split('-')
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| WancakError::MissingNextPage(href.to_string()))
}

/// Classify a listing image. Relative sources are NSFW and get the base
/// prepended as-is.
pub fn classify_listing_image(src: &str, base: &str) -> (String, bool) {
    if src.starts_with(SAFE_IMAGE_PREFIX) {
        (src.to_string(), false)
    } else {
        (format!("{base}{src}"), true)
    }
}

/// Classify a post page image. Relative sources are NSFW and are replaced by
/// the placeholder.
pub fn classify_post_image(src: &str, base: &str) -> (String, bool) {
    if src.starts_with(SAFE_IMAGE_PREFIX) {
        (src.to_string(), false)
    } else {
        (format!("{base}{UNSAVE_IMAGE_PATH}"), true)
    }
}

// ── Private helpers ─────────────────────────────────────────────────────────

fn parse_listing_block(block: ElementRef<'_>, base: &str) -> Option<Post> {
    let s = selectors();
    let id = first_attr(block.select(&s.upper_span), "rel");
    if id.is_empty() {
        return None;
    }

    let title = text_of(block.select(&s.heading));
    let src = first_attr(block.select(&s.img), "src");
    let (img, nsfw) = classify_listing_image(src, base);
    let votes = text_of(block.select(&s.with_id).filter(|el| is_vote_counter(el, id)));

    Some(Post {
        id: id.to_string(),
        title,
        url: format!("{base}/{id}"),
        img,
        votes,
        nsfw,
    })
}

/// Attribute of the first element in the selection, or `""`.
fn first_attr<'a>(mut selection: impl Iterator<Item = ElementRef<'a>>, attr: &str) -> &'a str {
    selection
        .next()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or("")
}

/// Concatenated text of every element in the selection.
fn text_of<'a>(selection: impl Iterator<Item = ElementRef<'a>>) -> String {
    selection.flat_map(|el| el.text()).collect()
}

fn is_vote_counter(el: &ElementRef<'_>, id: &str) -> bool {
    el.value()
        .id()
        .and_then(|v| v.strip_prefix(VOTE_ID_PREFIX))
        .is_some_and(|rest| rest == id)
}

// ── Tests ───────────────────────────────────────────────────────────────────
