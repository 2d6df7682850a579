// crates/shared-kernel/src/infrastructure/retry.rs

use rand::Rng;

use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 20,
        }
    }
}

/// Runs `action`, retrying on `ConcurrencyConflict` with exponential backoff
/// and jitter. Every other error is returned as is.
pub async fn with_retry<F, Fut, T>(config: RetryConfig, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    for attempt in 0..=config.max_retries {
        match action().await {
            Ok(res) => return Ok(res),
            Err(e) if e.is_concurrency_conflict() && attempt < config.max_retries => {
                let base_backoff = config.initial_backoff_ms * 2u64.pow(attempt);

                // Up to 25% jitter to desynchronise competing writers
                let jitter = rand::rng().random_range(0..base_backoff / 4 + 1);

                let backoff = std::time::Duration::from_millis(base_backoff + jitter);

                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries = config.max_retries,
                    ?backoff,
                    "Concurrency conflict, retrying"
                );

                tokio::time::sleep(backoff).await;
            }
            Err(e) if e.is_concurrency_conflict() => break,
            Err(e) => return Err(e),
        }
    }

    Err(DomainError::TooManyConflicts(format!(
        "Operation failed after {} retries due to persistent conflicts",
        config.max_retries
    )))
}
