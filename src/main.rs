//! Reelgrab main entry point
//!
//! This is the command-line interface for the reelgrab catalog scraper.

use anyhow::Context;
use clap::Parser;
use reelgrab::config::{load_config_with_hash, Config};
use reelgrab::scraper::scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Reelgrab: a paginated movie-catalog scraper
///
/// Reelgrab walks a site's listing pages, follows each item's detail link,
/// extracts a fixed set of fields by pattern matching, and writes one JSON
/// record file per item.
#[derive(Parser, Debug)]
#[command(name = "reelgrab")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes a paginated catalog into JSON record files", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults are used if omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    scrape(config).await.context("scrape run failed")?;
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("reelgrab=info,warn"),
            1 => EnvFilter::new("reelgrab=debug,info"),
            2 => EnvFilter::new("reelgrab=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the run plan
fn handle_dry_run(config: &Config) {
    println!("=== Reelgrab Dry Run ===\n");

    println!("Site:");
    println!("  Origin: {}", config.site.origin);
    println!("  Pages: 1..={}", config.site.page_count);

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);

    println!("\nScrape:");
    println!("  Workers: {}", config.scrape.workers);
    println!("  Max attempts per item: {}", config.scrape.max_attempts);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory.display());
    println!("  (removed and recreated at run start)");

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch {} listing pages from {}/page/<n>",
        config.site.page_count, config.site.origin
    );
}
