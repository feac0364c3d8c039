//! Retry policies for GraphQL requests.

use crate::error::HttpError;
use std::future::Future;
use std::time::Duration;

/// Retry policy for a query.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt.
    None,
    /// Retry on transport failures, 429 and 502/503/504 with exponential
    /// backoff. Subgraph queries are reads, so this is the default.
    #[default]
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add ±25% jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// Hosted subgraphs shed load with 429 and flap behind gateways (502-504).
    pub fn idempotent() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }

    /// Whether a failed attempt is worth repeating.
    pub fn should_retry(&self, error: &HttpError) -> bool {
        match error {
            HttpError::ServerError { status, .. } => self.retryable_statuses.contains(status),
            HttpError::RateLimited { .. } => self.retryable_statuses.contains(&429),
            HttpError::Timeout => true,
            HttpError::Reqwest(re) => {
                #[cfg(not(target_arch = "wasm32"))]
                let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                #[cfg(target_arch = "wasm32")]
                let retryable = re.is_timeout() || re.is_request();
                retryable
            }
            _ => false,
        }
    }

    /// Wait before the retry that follows `error` on `attempt` (0-indexed).
    ///
    /// A server-supplied `Retry-After` replaces the backoff when longer, but
    /// never exceeds `max_delay`.
    pub fn delay_after(&self, error: &HttpError, attempt: u32) -> Duration {
        let backoff = self.delay_for_attempt(attempt);
        match error {
            HttpError::RateLimited {
                retry_after_ms: Some(ms),
            } => backoff.max(Duration::from_millis(*ms).min(self.max_delay)),
            _ => backoff,
        }
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or runs out
/// of attempts.
///
/// Exhausting `max_retries` yields [`HttpError::MaxRetriesExceeded`] carrying
/// the last failure.
pub(crate) async fn retry_with<T, F, Fut>(
    config: &RetryConfig,
    url: &str,
    mut op: F,
) -> Result<T, HttpError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, HttpError>>,
{
    let mut last_error = None;

    for attempt in 0..=config.max_retries {
        match op().await {
            Ok(resp) => return Ok(resp),
            Err(e) if !config.should_retry(&e) => return Err(e),
            Err(e) => {
                if attempt < config.max_retries {
                    let delay = config.delay_after(&e, attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying query to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                }
                last_error = Some(e);
            }
        }
    }

    Err(HttpError::MaxRetriesExceeded {
        attempts: config.max_retries + 1,
        last_error: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    })
}
