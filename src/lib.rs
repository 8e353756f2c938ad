//! Reelgrab: a paginated movie-catalog scraper
//!
//! This crate fetches listing pages from a single site, follows each item's
//! detail link, extracts a fixed set of fields by pattern matching, and
//! writes one JSON record file per item.

pub mod config;
pub mod persist;
pub mod record;
pub mod scraper;

use thiserror::Error;

/// Main error type for reelgrab operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output setup error: {0}")]
    Persist(#[from] persist::PersistError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for reelgrab operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::Record;
pub use scraper::{extract_record, fetch_text, scrape, Coordinator};
