//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::models::{RankingEntry, RankingsSnapshot};

/// How long an error stays in the status bar.
const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// A snapshot older than this many poll intervals is shown as stale.
const STALE_AFTER_INTERVALS: u32 = 3;

/// Central application state container.
///
/// Mutated only through [`update`](super::event::update).
pub struct App {
    // -- Rankings --
    /// Top gainers, descending by change.
    pub top: Vec<RankingEntry>,
    /// Top losers, ascending by change.
    pub bottom: Vec<RankingEntry>,

    // -- Feed State --
    /// When the current snapshot arrived.
    pub last_update: Option<Instant>,
    /// Most recent fetch failure (clears after timeout).
    pub last_error: Option<ErrorDisplay>,
    /// Configured poll period.
    pub poll_interval: Duration,
    /// Short name of the rankings source.
    pub source_label: String,
    /// Snapshots applied so far.
    pub snapshot_count: u64,
    /// Failed fetches so far.
    pub failure_count: u64,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an App with empty rankings.
    pub fn new(source_label: impl Into<String>, poll_interval: Duration) -> Self {
        Self {
            top: Vec::new(),
            bottom: Vec::new(),

            last_update: None,
            last_error: None,
            poll_interval,
            source_label: source_label.into(),
            snapshot_count: 0,
            failure_count: 0,

            should_quit: false,
        }
    }

    /// Replaces both lists with the snapshot's, verbatim.
    pub fn apply_snapshot(&mut self, snapshot: RankingsSnapshot) {
        self.top = snapshot.top;
        self.bottom = snapshot.bottom;
        self.last_update = Some(Instant::now());
        self.last_error = None;
        self.snapshot_count += 1;
    }

    /// Records a failed fetch. The current lists are left untouched.
    pub fn record_failure(&mut self, reason: impl Into<String>) {
        self.failure_count += 1;
        self.show_error(reason);
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(ErrorDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears error messages older than 5 seconds.
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.last_error
            && error.timestamp.elapsed() > ERROR_DISPLAY_DURATION
        {
            self.last_error = None;
        }
    }

    /// Current lists as a snapshot.
    pub fn snapshot(&self) -> RankingsSnapshot {
        RankingsSnapshot {
            top: self.top.clone(),
            bottom: self.bottom.clone(),
        }
    }

    /// Freshness of the displayed data.
    pub fn feed_status(&self) -> FeedStatus {
        match self.last_update {
            None => FeedStatus::Waiting,
            Some(at) if at.elapsed() > self.poll_interval * STALE_AFTER_INTERVALS => {
                FeedStatus::Stale
            }
            Some(_) => FeedStatus::Live,
        }
    }
}

/// Freshness of the rankings on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    /// No snapshot received yet.
    Waiting,
    /// Last snapshot is recent.
    Live,
    /// Last snapshot is older than the staleness threshold.
    Stale,
}

impl FeedStatus {
    /// Returns a display string for the status.
    pub fn label(&self) -> &'static str {
        match self {
            FeedStatus::Waiting => "Waiting...",
            FeedStatus::Live => "Live",
            FeedStatus::Stale => "Stale",
        }
    }
}

/// Error message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    /// The error message.
    pub message: String,
    /// When the error was shown.
    pub timestamp: Instant,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn entry(ticker: &str, change: rust_decimal::Decimal) -> RankingEntry {
        RankingEntry {
            ticker: ticker.to_string(),
            change,
        }
    }

    #[test]
    fn new_app_is_waiting() {
        let app = App::new("http", Duration::from_secs(1));
        assert!(app.top.is_empty());
        assert!(app.bottom.is_empty());
        assert_eq!(app.feed_status(), FeedStatus::Waiting);
    }

    #[test]
    fn snapshot_replaces_lists_wholesale() {
        let mut app = App::new("http", Duration::from_secs(1));
        app.apply_snapshot(RankingsSnapshot {
            top: vec![entry("AAA", dec!(5.1)), entry("BBB", dec!(2))],
            bottom: vec![entry("ZZZ", dec!(-3.25))],
        });
        app.apply_snapshot(RankingsSnapshot {
            top: vec![entry("CCC", dec!(1))],
            bottom: vec![],
        });

        assert_eq!(app.top, vec![entry("CCC", dec!(1))]);
        assert!(app.bottom.is_empty());
        assert_eq!(app.snapshot_count, 2);
        assert_eq!(app.feed_status(), FeedStatus::Live);
    }

    #[test]
    fn failure_keeps_lists_and_sets_error() {
        let mut app = App::new("http", Duration::from_secs(1));
        app.apply_snapshot(RankingsSnapshot {
            top: vec![entry("AAA", dec!(5.1))],
            bottom: vec![entry("ZZZ", dec!(-3.25))],
        });
        let before = app.snapshot();

        app.record_failure("connection refused");

        assert_eq!(app.snapshot(), before);
        assert_eq!(app.failure_count, 1);
        assert_eq!(
            app.last_error.as_ref().map(|e| e.message.as_str()),
            Some("connection refused")
        );
    }

    #[test]
    fn snapshot_clears_error() {
        let mut app = App::new("http", Duration::from_secs(1));
        app.record_failure("timeout");
        app.apply_snapshot(RankingsSnapshot::default());
        assert!(app.last_error.is_none());
    }

    #[test]
    fn old_snapshot_is_stale() {
        let mut app = App::new("http", Duration::from_millis(10));
        app.apply_snapshot(RankingsSnapshot::default());
        app.last_update = Some(Instant::now() - Duration::from_secs(1));
        assert_eq!(app.feed_status(), FeedStatus::Stale);
    }

    #[test]
    fn errors_expire() {
        let mut app = App::new("http", Duration::from_secs(1));
        app.show_error("boom");
        app.last_error.as_mut().unwrap().timestamp = Instant::now() - Duration::from_secs(6);
        app.clear_stale_errors();
        assert!(app.last_error.is_none());
    }
}
