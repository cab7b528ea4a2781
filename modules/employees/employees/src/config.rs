//! Configuration for the employees module.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Employees module configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmployeesConfig {
    /// Remote employee service settings.
    pub upstream: UpstreamConfig,
    /// Result cache settings, applied to every namespace.
    pub cache: CacheConfig,
    /// Retry policy for read and delete calls.
    pub retry: RetryConfig,
}

/// Remote employee service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Base URL of the employee collection, without a trailing slash.
    pub base_url: String,

    /// Timeout for a single request attempt.
    #[serde(with = "duration_serde")]
    pub request_timeout: Duration,

    /// Maximum accepted response body, in bytes.
    pub max_body_size: usize,

    /// Value of the `User-Agent` header sent upstream.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8112/api/v1/employee".to_owned(),
            request_timeout: Duration::from_secs(10),
            max_body_size: 4 * 1024 * 1024,
            user_agent: concat!("employee-facade/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

/// Result cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Time-to-live measured from the write of an entry.
    #[serde(with = "duration_serde")]
    pub ttl: Duration,

    /// Maximum number of entries per namespace.
    pub max_entries: u64,

    /// Initial sizing hint per namespace.
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5 * 60),
            max_entries: 10_000,
            initial_capacity: 100,
        }
    }
}

/// Retry policy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryConfig {
    /// Total attempts including the first one.
    pub max_attempts: usize,

    /// Delay before the first retry.
    #[serde(with = "duration_serde")]
    pub initial_backoff: Duration,

    /// Growth factor applied to the delay after each retry.
    pub multiplier: f64,

    /// Upper bound for a single delay.
    #[serde(with = "duration_serde")]
    pub max_backoff: Duration,

    /// Add up to 25% random delay on top of each backoff.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(200),
            multiplier: 2.0,
            max_backoff: Duration::from_secs(10),
            jitter: false,
        }
    }
}

/// Humantime (`"5m"`, `"200ms"`) serde support for `Duration` fields.
pub mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use std::time::Duration;

    /// # Errors
    /// Returns an error if the string is not a valid humantime duration.
    pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        humantime::parse_duration(&raw).map_err(de::Error::custom)
    }

    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(&humantime::format_duration(*d))
    }
}
