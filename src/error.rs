//! Crate-level error types.
//!
//! [`StockPulseError`] unifies every error source (configuration, HTTP,
//! JSON, terminal I/O) behind a single enum so callers can match on the
//! variant they care about while still using `?` for propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StockPulseError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum StockPulseError {
    /// An environment variable held a value that could not be used.
    #[error("configuration error: {0}")]
    Config(String),

    /// The rankings request failed: connection, timeout, or non-success status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the rankings schema.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal setup, teardown, or drawing failed.
    #[error("io error: {0}")]
    Io(String),
}
