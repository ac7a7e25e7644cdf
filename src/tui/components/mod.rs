//! Reusable widgets for the dashboard.

pub mod card;
pub mod rankings;
pub mod status_bar;
