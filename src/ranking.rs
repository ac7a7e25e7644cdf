//! Percentage-change ranking over a set of quotes.
//!
//! Produces the same `{top, bottom}` shape the rankings endpoint serves,
//! so locally generated data flows through the dashboard unchanged.

use rust_decimal::Decimal;

use crate::models::{RankingEntry, RankingsSnapshot};

/// Number of entries in each list of a served snapshot.
pub const DEFAULT_RANK_SIZE: usize = 5;

/// Heavily traded US tickers ranked by default.
pub const DEFAULT_TICKERS: [&str; 20] = [
    "AAPL", "MSFT", "GOOG", "AMZN", "TSLA", "META", "NVDA", "NFLX", "AMD", "INTC", "BABA", "UBER",
    "DIS", "PEP", "KO", "NKE", "XOM", "CVX", "BA", "PFE",
];

/// Opening and latest price for one ticker over the ranking window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub ticker: String,
    pub open: Decimal,
    pub last: Decimal,
}

impl Quote {
    /// Percentage change from `open` to `last`, rounded to two decimals.
    ///
    /// Returns `None` when `open` is zero.
    pub fn change_pct(&self) -> Option<Decimal> {
        let diff = self.last - self.open;
        diff.checked_div(self.open)
            .map(|ratio| (ratio * Decimal::ONE_HUNDRED).round_dp(2))
    }
}

/// Ranks quotes by percentage change.
///
/// `top` holds the `n` largest changes in descending order and `bottom`
/// the `n` smallest in ascending order. Quotes without a usable open are
/// skipped. With fewer than `2n` quotes the two lists overlap.
pub fn rank_changes(quotes: &[Quote], n: usize) -> RankingsSnapshot {
    let mut changes: Vec<RankingEntry> = quotes
        .iter()
        .filter_map(|q| {
            q.change_pct().map(|change| RankingEntry {
                ticker: q.ticker.clone(),
                change,
            })
        })
        .collect();

    changes.sort_by(|a, b| b.change.cmp(&a.change));

    let top = changes.iter().take(n).cloned().collect();
    let bottom = changes.iter().rev().take(n).cloned().collect();

    RankingsSnapshot { top, bottom }
}
