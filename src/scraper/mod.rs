//! Scraper module for listing traversal and record extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with a fixed per-request timeout
//! - Link discovery on listing pages
//! - Pattern-based field extraction from detail pages
//! - Bounded retry of the fetch+extract step
//! - Worker-pool orchestration over page numbers

mod coordinator;
mod extract;
mod fetcher;
mod links;
mod retry;

pub use coordinator::{scrape, Coordinator};
pub use extract::{
    extract_categories, extract_cover, extract_drama, extract_record, extract_score,
    extract_title, ExtractError,
};
pub use fetcher::{build_http_client, fetch_page, fetch_text, FetchOutcome};
pub use links::extract_links;
pub use retry::retry_until_some;
