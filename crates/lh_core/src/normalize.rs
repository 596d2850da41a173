//! Turns upstream articles into view-safe ones.
//!
//! The headlines API withholds some articles by replacing their fields with the
//! `[Removed]` sentinel, and often omits content or description. Every
//! [`Article`] leaving this module has a usable title, description and content.

use chrono::{DateTime, Utc};

use crate::mock::generated_content;
use crate::slug::slugify;
use crate::types::{Article, RawArticle};

/// Upstream marker for withheld content. Treated exactly like an absent field.
pub const REMOVED: &str = "[Removed]";

pub const NO_DESCRIPTION: &str = "No description available...";

pub const LISTING_CONTENT_UNAVAILABLE: &str =
    "Full article content not available. Please click \"Read Original\" for complete details.";

pub const SEARCH_CONTENT_UNAVAILABLE: &str = "Full article content not available.";

/// What to show as content when neither content nor description exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFallback {
    Message(&'static str),
    /// Topic paragraph generated from the title.
    Generated,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty() && *v != REMOVED)
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|at| at.with_timezone(&Utc))
}

/// Normalize one article. Returns `None` when the article has no usable title.
pub fn normalize(raw: RawArticle, fallback: ContentFallback) -> Option<Article> {
    let title = present(raw.title.as_deref())?.to_string();
    let description = present(raw.description.as_deref());

    let content = match present(raw.content.as_deref()).or(description) {
        Some(text) => text.to_string(),
        None => match fallback {
            ContentFallback::Message(message) => message.to_string(),
            ContentFallback::Generated => generated_content(&title).to_string(),
        },
    };
    let description = description.unwrap_or(NO_DESCRIPTION).to_string();

    Some(Article {
        id: slugify(&title),
        published_at: parse_timestamp(raw.published_at.as_deref()),
        title,
        description,
        content,
        author: raw.author.filter(|a| !a.trim().is_empty()),
        source: raw.source.unwrap_or_default(),
        url_to_image: raw.url_to_image.filter(|u| !u.trim().is_empty()),
        url: raw.url.filter(|u| !u.trim().is_empty()),
    })
}

/// Normalization for category listings and top headlines.
pub fn listing(raws: Vec<RawArticle>) -> Vec<Article> {
    normalize_all(raws, ContentFallback::Message(LISTING_CONTENT_UNAVAILABLE))
}

/// Normalization for keyword search results.
pub fn search_results(raws: Vec<RawArticle>) -> Vec<Article> {
    normalize_all(raws, ContentFallback::Message(SEARCH_CONTENT_UNAVAILABLE))
}

/// Normalization for a single resolved article on the detail page.
pub fn detail(raw: RawArticle) -> Option<Article> {
    normalize(raw, ContentFallback::Generated)
}

fn normalize_all(raws: Vec<RawArticle>, fallback: ContentFallback) -> Vec<Article> {
    raws.into_iter()
        .filter_map(|raw| normalize(raw, fallback))
        .collect()
}
