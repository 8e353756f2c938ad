//! Detail-link discovery on listing pages
//!
//! A listing page names each item with an anchor carrying `class="name"`.
//! Discovery is a single pattern scan over the raw page text; matched
//! hrefs are site-relative and get prefixed with the configured origin.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a.*href="(.*)".*class="name">"#).expect("hardcoded pattern is valid")
});

/// Extracts detail-page URLs from listing page text
///
/// Returns absolute URLs in document order. No deduplication, no
/// validation; zero matches yield an empty vector.
///
/// # Arguments
///
/// * `listing` - Raw listing page text
/// * `origin` - Site origin to prefix onto the matched hrefs
pub fn extract_links(listing: &str, origin: &str) -> Vec<String> {
    NAME_ANCHOR_RE
        .captures_iter(listing)
        .map(|captures| format!("{}{}", origin, &captures[1]))
        .collect()
}
