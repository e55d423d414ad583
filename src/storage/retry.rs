use crate::config::RetryConfig;
use crate::model::{AppError, StorageError};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, warn};

/// Delay before the attempt following `attempt` (1-based): base, 2x base, 4x base...
pub fn backoff_delay(base_delay: Duration, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    base_delay.saturating_mul(1u32 << exponent)
}

/// Calls `connect` until it succeeds or `policy.max_attempts` is spent.
pub async fn connect_with_retry<T, F, Fut>(policy: &RetryConfig, mut connect: F) -> Result<T, AppError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, StorageError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1u32;
    loop {
        match connect(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts => {
                let delay = backoff_delay(policy.base_delay(), attempt);
                warn!(
                    "Connection attempt {}/{} failed: {}. Retrying in {:?}",
                    attempt, max_attempts, e, delay
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                error!("Connection attempt {}/{} failed: {}. Giving up", attempt, max_attempts, e);
                return Err(AppError::Connect {
                    attempts: attempt,
                    source: e,
                });
            }
        }
    }
}
