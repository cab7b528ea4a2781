use rand::Rng;
use std::time::Duration;

use crate::config::RetryConfig;

/// Exponential backoff parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialBackoff {
    pub initial: Duration,
    pub max: Duration,
    pub multiplier: f64,
    /// Adds a random 0-25% on top of each delay.
    pub jitter: bool,
}

impl From<&RetryConfig> for ExponentialBackoff {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            initial: cfg.initial_backoff,
            max: cfg.max_backoff,
            multiplier: cfg.multiplier,
            jitter: cfg.jitter,
        }
    }
}

/// Delay to wait after the failure of `retry` (0-indexed).
///
/// `initial * multiplier^retry`, clamped to `max`. Non-finite or negative
/// parameters fall back to safe values instead of panicking.
#[must_use]
pub fn calculate_backoff(backoff: &ExponentialBackoff, retry: usize) -> Duration {
    const MAX_BACKOFF_SECS: f64 = 86400.0;

    let retry = i32::try_from(retry).unwrap_or(i32::MAX);

    let multiplier = if backoff.multiplier.is_finite() && backoff.multiplier >= 0.0 {
        backoff.multiplier
    } else {
        1.0
    };

    let initial_secs = backoff.initial.as_secs_f64();
    let max_secs = backoff.max.as_secs_f64().min(MAX_BACKOFF_SECS);

    let base = initial_secs * multiplier.powi(retry);
    let clamped = if base.is_finite() {
        base.min(max_secs).max(0.0)
    } else {
        max_secs
    };
    let duration = Duration::from_secs_f64(clamped);

    let duration = if backoff.jitter {
        let factor = rand::rng().random_range(0.0..=0.25);
        duration + duration.mul_f64(factor)
    } else {
        duration
    };

    duration.min(Duration::from_secs_f64(max_secs))
}
