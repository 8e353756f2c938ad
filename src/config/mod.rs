//! Configuration loading, types, and validation
//!
//! Configuration is read from an optional TOML file; every field has a
//! default so a missing file (or a partial one) still yields a runnable
//! config matching the built-in site constants.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, FetchConfig, OutputConfig, ScrapeConfig, SiteConfig};
pub use validation::validate;
