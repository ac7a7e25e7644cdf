//! Application configuration loaded from environment variables.
//!
//! - `STOCKPULSE_RANKINGS_URL` overrides the rankings endpoint
//!   (default `http://localhost:8000/rankings`).
//! - `STOCKPULSE_POLL_INTERVAL_MS` sets the poll period in milliseconds
//!   (default `1000`).
//! - `STOCKPULSE_SOURCE` selects `http` (default) or `simulated`.
//! - `STOCKPULSE_LOG_FILE` enables tracing output to the given file.

use std::path::PathBuf;
use std::time::Duration;

/// Default rankings endpoint.
const DEFAULT_RANKINGS_URL: &str = "http://localhost:8000/rankings";

/// Default poll period.
const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub rankings: RankingsConfig,
    /// Destination for tracing output; logging is off when absent.
    pub log_file: Option<PathBuf>,
}

/// Where and how often rankings are fetched.
#[derive(Debug)]
pub struct RankingsConfig {
    pub url: String,
    pub poll_interval: Duration,
    pub source: SourceKind,
}

/// Backend that produces rankings snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// Poll the HTTP endpoint.
    #[default]
    Http,
    /// Generate snapshots locally from a random walk.
    Simulated,
}

impl SourceKind {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Http => "http",
            SourceKind::Simulated => "simulated",
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`StockPulseError::Config`](crate::StockPulseError::Config) if
/// the poll interval is not a positive integer or the source is unknown.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let url = non_empty_var("STOCKPULSE_RANKINGS_URL")
        .unwrap_or_else(|| DEFAULT_RANKINGS_URL.to_string());

    let poll_interval_ms = match non_empty_var("STOCKPULSE_POLL_INTERVAL_MS") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(0) | Err(_) => {
                return Err(crate::StockPulseError::Config(format!(
                    "STOCKPULSE_POLL_INTERVAL_MS must be a positive integer, got {raw:?}"
                )));
            }
            Ok(ms) => ms,
        },
        None => DEFAULT_POLL_INTERVAL_MS,
    };

    let source = match non_empty_var("STOCKPULSE_SOURCE").as_deref() {
        None | Some("http") => SourceKind::Http,
        Some("simulated") => SourceKind::Simulated,
        Some(other) => {
            return Err(crate::StockPulseError::Config(format!(
                "STOCKPULSE_SOURCE must be \"http\" or \"simulated\", got {other:?}"
            )));
        }
    };

    Ok(AppConfig {
        rankings: RankingsConfig {
            url,
            poll_interval: Duration::from_millis(poll_interval_ms),
            source,
        },
        log_file: non_empty_var("STOCKPULSE_LOG_FILE").map(PathBuf::from),
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
