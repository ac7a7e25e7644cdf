//! Wire models for the rankings endpoint.

pub mod ranking;

pub use ranking::{RankingEntry, RankingsSnapshot};
