//! Bounded retry of a fallible async operation
//!
//! Explicit retry wrapper: the operation signals failure by returning
//! `None`, and is re-invoked immediately (no backoff) until it succeeds
//! or the attempt budget runs out.

use std::future::Future;

/// Runs `operation` up to `max_attempts` times, returning the first `Some`
///
/// Each failed attempt is logged. Returns `None` once the budget is
/// exhausted; the operation is never invoked more than `max_attempts`
/// times.
///
/// # Arguments
///
/// * `max_attempts` - Attempt budget, >= 1
/// * `operation` - Async closure returning `Some(value)` on success
pub async fn retry_until_some<T, F, Fut>(max_attempts: u32, mut operation: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for attempt in 1..=max_attempts {
        if let Some(value) = operation().await {
            return Some(value);
        }
        if attempt < max_attempts {
            tracing::warn!("attempt {}/{} failed, retrying...", attempt, max_attempts);
        }
    }
    None
}
