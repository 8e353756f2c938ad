//! HTTP fetcher implementation
//!
//! One GET per call with a fixed timeout. Any transport error or non-200
//! status collapses to "no content" for the caller; there is no retry at
//! this layer.

use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Classified result of a single GET
#[derive(Debug)]
pub enum FetchOutcome {
    /// 200 response body
    Body(String),

    /// Response arrived with a status other than 200
    BadStatus(u16),

    /// Transport failure (timeout, connection error, body read error)
    Failed(String),
}

/// Builds the shared HTTP client with the configured per-request timeout
///
/// # Arguments
///
/// * `timeout_secs` - Per-request timeout in seconds
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs a single GET and classifies the outcome
///
/// No logging here; `fetch_text` is the logging seam callers use.
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let reason = if e.is_timeout() {
                format!("timeout: {}", e)
            } else if e.is_connect() {
                format!("connection failed: {}", e)
            } else {
                e.to_string()
            };
            return FetchOutcome::Failed(reason);
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        return FetchOutcome::BadStatus(status.as_u16());
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Body(body),
        Err(e) => FetchOutcome::Failed(format!("body read failed: {}", e)),
    }
}

/// Fetches a URL and returns its body text, or `None` on any failure
///
/// Every attempt and its outcome is logged. A `None` result means the
/// caller should skip this URL; it carries no distinction between a
/// transport failure and an abnormal status.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
pub async fn fetch_text(client: &Client, url: &str) -> Option<String> {
    tracing::info!("requesting {}", url);

    match fetch_page(client, url).await {
        FetchOutcome::Body(body) => {
            tracing::info!("request {} succeeded", url);
            Some(body)
        }
        FetchOutcome::BadStatus(status) => {
            tracing::warn!("request {} returned abnormal status {}", url, status);
            None
        }
        FetchOutcome::Failed(reason) => {
            tracing::warn!("request {} failed: {}", url, reason);
            None
        }
    }
}
