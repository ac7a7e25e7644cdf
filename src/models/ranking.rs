use rust_decimal::Decimal;
use serde::Deserialize;

/// One ticker's percentage change.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RankingEntry {
    pub ticker: String,
    /// Signed percentage change, e.g. `5.1` for +5.1%. Must be a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub change: Decimal,
}

/// Full payload of one poll of `GET /rankings`.
///
/// `top` is ordered by descending change and `bottom` by ascending change.
/// The ordering comes from the upstream service and is never re-checked.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RankingsSnapshot {
    pub top: Vec<RankingEntry>,
    pub bottom: Vec<RankingEntry>,
}

impl RankingsSnapshot {
    /// Returns `true` when both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }
}
