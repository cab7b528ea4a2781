use std::future::Future;

use crate::config::RetryConfig;
use crate::domain::gateway::UpstreamError;

use super::backoff::{ExponentialBackoff, calculate_backoff};

/// Bounded retry with exponential backoff around a single upstream call.
///
/// Outcomes:
/// - success is returned as soon as it happens;
/// - a 429 answer stops immediately with `UpstreamError::RateLimited`;
/// - any other non-transient failure (4xx, missing payload) is returned as is;
/// - transient failures are retried until `max_attempts` calls were made,
///   after which the last failure is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_attempts: usize,
    backoff: ExponentialBackoff,
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_attempts: usize, backoff: ExponentialBackoff) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }


    /// Run `call` under this policy. `operation` names the call in logs.
    ///
    /// # Errors
    /// See the type-level docs for which failure is surfaced.
    pub async fn run<T, F, Fut>(
        &self,
        operation: &'static str,
        mut call: F,
    ) -> Result<T, UpstreamError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, UpstreamError>>,
    {
        let mut attempt = 0usize;
        loop {
            let err = match call().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if err.is_too_many_requests() {
                tracing::warn!(operation, attempt = attempt + 1, "Upstream rate limited, giving up");
                let message = match err {
                    UpstreamError::Transport { message, .. } => message,
                    other => other.to_string(),
                };
                return Err(UpstreamError::RateLimited { message });
            }

            if !err.is_transient() {
                return Err(err);
            }

            if attempt + 1 >= self.max_attempts {
                tracing::warn!(
                    operation,
                    attempts = self.max_attempts,
                    error = %err,
                    "Upstream call failed, retries exhausted"
                );
                return Err(err);
            }

            let backoff = calculate_backoff(&self.backoff, attempt);
            tracing::debug!(
                operation,
                retry = attempt + 1,
                max_attempts = self.max_attempts,
                error = %err,
                backoff_ms = backoff.as_millis(),
                "Retrying upstream call after error"
            );
            tokio::time::sleep(backoff).await;
            attempt += 1;
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self::new(cfg.max_attempts, ExponentialBackoff::from(cfg))
    }
}
