//! Terminal dashboard for the rankings feed.
//!
//! Provides a Ratatui-based TUI showing top gainers and top losers side by
//! side, refreshed as the poller delivers snapshots.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message, update};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
