//! Human-readable article identifiers.
//!
//! A slug is derived from a title and is lossy: two titles that differ only in
//! punctuation or case share a slug. Nothing upstream stores it, so resolving a
//! slug back to an article is a search (see `lh_newsapi::resolver`).

/// Derive the slug for an article title.
///
/// Lowercases, drops everything but ASCII letters and digits, and joins the
/// remaining words with single dashes. Dashes already present count as word
/// separators, so slugifying a slug returns it unchanged. This differs from
/// stripping dashes outright: `"COVID-19 cases"` becomes `covid-19-cases`, not
/// `covid19-cases`.
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                Some(c)
            } else if c.is_whitespace() || c == '-' {
                Some(' ')
            } else {
                None
            }
        })
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Normalize a slug taken from a URL: lowercase, collapse repeated dashes and
/// strip leading/trailing ones. Other characters are left alone.
pub fn clean_slug(input: &str) -> String {
    input
        .to_lowercase()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
