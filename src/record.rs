//! The extracted record for a single catalog item

use serde::Serialize;

/// Structured result of field extraction for one detail page.
///
/// Field order is the serialization order of the record file:
/// cover, title, type, score, drama.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Cover image URL
    pub cover: String,

    /// Item title; also the basis of the record's filename
    pub title: String,

    /// Category labels, space-joined
    #[serde(rename = "type")]
    pub categories: String,

    /// Rating score
    pub score: f64,

    /// Synopsis text
    pub drama: String,
}
