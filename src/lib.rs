//! Gainers and losers dashboard.
//!
//! Polls a rankings endpoint on a fixed period and renders the top-gaining
//! and top-losing tickers in a terminal UI. Rankings can also be generated
//! offline from a simulated random walk.

pub mod config;
pub mod error;
pub mod models;
pub mod poller;
pub mod ranking;
pub mod tui;

pub use error::{Result, StockPulseError};
