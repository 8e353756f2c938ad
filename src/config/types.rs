use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for reelgrab
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site origin, scheme plus host, no trailing slash.
    /// Listing pages live at `<origin>/page/<n>` and extracted detail
    /// links are prefixed with this value.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Number of listing pages to scrape, 1..=page-count inclusive
    #[serde(rename = "page-count", default = "default_page_count")]
    pub page_count: u32,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Scrape loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    /// Number of worker tasks consuming page numbers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Attempt budget for the fetch+extract step of a single item
    #[serde(rename = "max-attempts", default = "default_max_attempts")]
    pub max_attempts: u32,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives one JSON file per record.
    /// Removed and recreated at the start of every run.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

fn default_origin() -> String {
    "https://ssr1.scrape.center".to_string()
}

fn default_page_count() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().min(32))
        .unwrap_or(4)
}

fn default_max_attempts() -> u32 {
    3
}

fn default_directory() -> PathBuf {
    PathBuf::from("./records")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            page_count: default_page_count(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_constants() {
        let config = Config::default();
        assert_eq!(config.site.origin, "https://ssr1.scrape.center");
        assert_eq!(config.site.page_count, 10);
        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(config.scrape.max_attempts, 3);
        assert_eq!(config.output.directory, PathBuf::from("./records"));
        assert!(config.scrape.workers >= 1);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.page_count, 10);
        assert_eq!(config.fetch.timeout_secs, 10);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[site]
page-count = 3
"#,
        )
        .unwrap();
        assert_eq!(config.site.page_count, 3);
        assert_eq!(config.site.origin, "https://ssr1.scrape.center");
        assert_eq!(config.scrape.max_attempts, 3);
    }
}
