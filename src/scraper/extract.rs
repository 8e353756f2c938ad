//! Pattern-based field extraction from detail pages
//!
//! Each of the five fields is matched by its own fixed pattern against the
//! raw page text, so a markup change breaks exactly one extractor and its
//! tests. The patterns are line-oriented: `.` does not cross newlines, and
//! the explicit `\n`s encode how the site formats each block.
//!
//! `extract_record` is all-or-nothing; a miss on any field (or a score
//! that does not parse as a number) fails the whole attempt.

use crate::record::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// A failed extraction attempt
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error("field '{0}' not found in page text")]
    MissingField(&'static str),

    #[error("score '{0}' is not a number")]
    InvalidScore(String),
}

static COVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img.*\n.*\n.*src="(.*?)".*\n.*class="cover">"#)
        .expect("hardcoded pattern is valid")
});

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<h2.*class="m-b-sm">(.*?)</h2>"#).expect("hardcoded pattern is valid")
});

static CATEGORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<button.*\n.*class="el-button category el-button--primary el-button--mini">.*\n.*<span>(.*?)</span>.*\n.*</button>"#,
    )
    .expect("hardcoded pattern is valid")
});

static SCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<div .*class="el-col el-col-24 el-col-xs-8 el-col-sm-4"><p .*\n.*>(.*\n.*)</p>"#)
        .expect("hardcoded pattern is valid")
});

static DRAMA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<div.*class="drama">.*\n.*<p.*>(.*\n.*\n.*)</p></div>"#)
        .expect("hardcoded pattern is valid")
});

/// Extracts the cover image URL
pub fn extract_cover(text: &str) -> Option<String> {
    COVER_RE
        .captures(text)
        .map(|captures| captures[1].to_string())
}

/// Extracts the item title
pub fn extract_title(text: &str) -> Option<String> {
    TITLE_RE
        .captures(text)
        .map(|captures| captures[1].to_string())
}

/// Extracts all category labels, in document order
pub fn extract_categories(text: &str) -> Vec<String> {
    CATEGORY_RE
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Extracts the raw score text, untrimmed
pub fn extract_score(text: &str) -> Option<String> {
    SCORE_RE
        .captures(text)
        .map(|captures| captures[1].to_string())
}

/// Extracts the synopsis text, whitespace preserved
pub fn extract_drama(text: &str) -> Option<String> {
    DRAMA_RE
        .captures(text)
        .map(|captures| captures[1].to_string())
}

/// Extracts a complete record from detail page text
///
/// All five fields must match; the score text is trimmed and parsed as a
/// float. There is no partial result: the first missing field fails the
/// attempt, and the caller owns any retry.
///
/// # Arguments
///
/// * `text` - Raw detail page text
///
/// # Returns
///
/// * `Ok(Record)` - All fields extracted
/// * `Err(ExtractError)` - A field was missing or the score was malformed
pub fn extract_record(text: &str) -> Result<Record, ExtractError> {
    let cover = extract_cover(text).ok_or(ExtractError::MissingField("cover"))?;
    let title = extract_title(text).ok_or(ExtractError::MissingField("title"))?;

    let categories = extract_categories(text);
    if categories.is_empty() {
        return Err(ExtractError::MissingField("type"));
    }

    let raw_score = extract_score(text).ok_or(ExtractError::MissingField("score"))?;
    let trimmed = raw_score.trim();
    let score: f64 = trimmed
        .parse()
        .map_err(|_| ExtractError::InvalidScore(trimmed.to_string()))?;

    let drama = extract_drama(text).ok_or(ExtractError::MissingField("drama"))?;

    Ok(Record {
        cover,
        title,
        categories: categories.join(" "),
        score,
        drama,
    })
}
