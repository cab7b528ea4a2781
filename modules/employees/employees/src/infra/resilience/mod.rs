//! Retry with exponential backoff for upstream calls.

pub mod backoff;
pub mod retry;

pub use backoff::{ExponentialBackoff, calculate_backoff};
pub use retry::RetryPolicy;
