//! Offline rankings from a seeded random walk.
//!
//! Each fetch moves every ticker's last price by up to ±0.5% and ranks the
//! changes since the first fetch, giving the dashboard live-looking data
//! without a rankings service.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::Result;
use crate::models::RankingsSnapshot;
use crate::ranking::{DEFAULT_RANK_SIZE, DEFAULT_TICKERS, Quote, rank_changes};

use super::RankingSource;

/// Largest single-step move, in basis points.
const MAX_STEP_BPS: i64 = 50;

struct WalkState {
    rng: StdRng,
    quotes: Vec<Quote>,
}

/// Random-walk source over [`DEFAULT_TICKERS`].
pub struct SimulatedSource {
    state: Mutex<WalkState>,
    rank_size: usize,
}

impl SimulatedSource {
    /// Creates a walk whose opening prices and moves derive from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let quotes = DEFAULT_TICKERS
            .iter()
            .map(|ticker| {
                let open = Decimal::new(rng.gen_range(2_000..50_000), 2);
                Quote {
                    ticker: (*ticker).to_string(),
                    open,
                    last: open,
                }
            })
            .collect();

        Self {
            state: Mutex::new(WalkState { rng, quotes }),
            rank_size: DEFAULT_RANK_SIZE,
        }
    }

    /// Advances the walk one step and ranks the result.
    pub fn step(&self) -> RankingsSnapshot {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let WalkState { rng, quotes } = &mut *state;

        for quote in quotes.iter_mut() {
            let bps = rng.gen_range(-MAX_STEP_BPS..=MAX_STEP_BPS);
            let factor = Decimal::ONE + Decimal::new(bps, 4);
            quote.last = (quote.last * factor).round_dp(4);
        }

        rank_changes(quotes, self.rank_size)
    }
}

impl RankingSource for SimulatedSource {
    async fn fetch(&self) -> Result<RankingsSnapshot> {
        Ok(self.step())
    }
}
