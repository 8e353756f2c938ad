//! Scrape orchestration
//!
//! A fixed-size pool of worker tasks consumes page numbers from a shared
//! queue. Each worker runs one page task to completion: fetch the listing,
//! discover detail links, then fetch+extract+persist each item in link
//! order. Pages have no ordering guarantee relative to each other.

use crate::config::Config;
use crate::persist::{prepare_output_dir, save_record};
use crate::scraper::extract::extract_record;
use crate::scraper::fetcher::{build_http_client, fetch_text};
use crate::scraper::links::extract_links;
use crate::scraper::retry::retry_until_some;
use crate::ScrapeError;
use reqwest::Client;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinSet;

/// Coordinates the worker pool and holds the run's shared state
pub struct Coordinator {
    config: Config,
    client: Client,
    pages_processed: AtomicUsize,
    records_saved: AtomicUsize,
    items_given_up: AtomicUsize,
}

impl Coordinator {
    /// Creates a new coordinator, building the shared HTTP client
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(config.fetch.timeout_secs)?;
        Ok(Self {
            config,
            client,
            pages_processed: AtomicUsize::new(0),
            records_saved: AtomicUsize::new(0),
            items_given_up: AtomicUsize::new(0),
        })
    }

    /// Runs the scrape to completion
    ///
    /// Seeds the page queue with `1..=page_count`, spawns the configured
    /// number of workers, and waits for all of them. Per-item failures
    /// never fail the run.
    pub async fn run(self: Arc<Self>) -> Result<(), ScrapeError> {
        let start = std::time::Instant::now();
        let page_count = self.config.site.page_count;
        let workers = self.config.scrape.workers;

        tracing::info!(
            "starting scrape: {} pages, {} workers, origin {}",
            page_count,
            workers,
            self.config.site.origin
        );

        let queue: Arc<Mutex<VecDeque<u32>>> =
            Arc::new(Mutex::new((1..=page_count).collect()));

        let mut pool = JoinSet::new();
        for worker_id in 0..workers {
            let coordinator = Arc::clone(&self);
            let queue = Arc::clone(&queue);
            pool.spawn(async move {
                loop {
                    // Lock is released before the await point
                    let page = queue.lock().unwrap().pop_front();
                    match page {
                        Some(page) => coordinator.process_page(page).await,
                        None => break,
                    }
                }
                tracing::debug!("worker {} done", worker_id);
            });
        }

        while let Some(joined) = pool.join_next().await {
            if let Err(e) = joined {
                tracing::error!("worker task failed: {}", e);
            }
        }

        tracing::info!(
            "scrape finished: {} pages processed, {} records saved, {} items given up, in {:?}",
            self.pages_processed.load(Ordering::Relaxed),
            self.records_saved.load(Ordering::Relaxed),
            self.items_given_up.load(Ordering::Relaxed),
            start.elapsed()
        );

        Ok(())
    }

    /// Runs one page task: fetch listing, discover links, process items
    ///
    /// Terminal on the first missing precondition: an unfetchable listing
    /// or a listing with no links ends the task without error.
    async fn process_page(&self, page: u32) {
        let listing_url = format!("{}/page/{}", self.config.site.origin, page);

        let Some(listing) = fetch_text(&self.client, &listing_url).await else {
            return;
        };

        let links = extract_links(&listing, &self.config.site.origin);
        if links.is_empty() {
            tracing::info!("page {}: no detail links found", page);
            return;
        }
        tracing::info!("page {}: {} detail links", page, links.len());

        // Detail pages are processed strictly in link order
        for link in &links {
            self.process_item(link).await;
        }

        self.pages_processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Fetches and extracts one item, retrying the pair, then persists it
    ///
    /// A failed fetch feeds empty text to the extractor, which fails as a
    /// pattern miss and burns a retry attempt; the retry layer does not
    /// distinguish the two.
    async fn process_item(&self, link: &str) {
        let max_attempts = self.config.scrape.max_attempts;

        let record = retry_until_some(max_attempts, || async {
            let text = fetch_text(&self.client, link).await.unwrap_or_default();
            match extract_record(&text) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("extraction failed for {}: {}", link, e);
                    None
                }
            }
        })
        .await;

        let Some(record) = record else {
            tracing::warn!("giving up on {} after {} attempts", link, max_attempts);
            self.items_given_up.fetch_add(1, Ordering::Relaxed);
            return;
        };

        if let Ok(json) = serde_json::to_string_pretty(&record) {
            tracing::debug!("extracted record:\n{}", json);
        }

        match save_record(&self.config.output.directory, &record) {
            Ok(path) => {
                tracing::info!("saved '{}' to {}", record.title, path.display());
                self.records_saved.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                // The record is lost; the run continues
                tracing::error!("save failed for '{}': {}", record.title, e);
            }
        }
    }
}

/// Runs a complete scrape operation
///
/// Resets the output directory (fatal on failure, before any work is
/// dispatched), then runs the worker pool to completion.
///
/// # Arguments
///
/// * `config` - The scrape configuration
///
/// # Returns
///
/// * `Ok(())` - Run completed; per-item failures are logged, not returned
/// * `Err(ScrapeError)` - Output setup or client construction failed
pub async fn scrape(config: Config) -> Result<(), ScrapeError> {
    tracing::info!(
        "resetting output directory {}",
        config.output.directory.display()
    );
    prepare_output_dir(&config.output.directory)?;

    let coordinator = Arc::new(Coordinator::new(config)?);
    coordinator.run().await
}
