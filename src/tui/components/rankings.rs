//! Gainers / losers list.
//!
//! Rows appear in the order received, one per entry: ticker on the left,
//! direction indicator and change on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rust_decimal::{Decimal, RoundingStrategy};

use super::card::card;
use crate::models::RankingEntry;

/// Which side of the rankings a list shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Gain,
    Loss,
}

impl Trend {
    /// Card title.
    pub fn title(&self) -> &'static str {
        match self {
            Trend::Gain => "Top Gainers",
            Trend::Loss => "Top Losers",
        }
    }

    /// Direction arrow shown beside each change.
    pub fn indicator(&self) -> &'static str {
        match self {
            Trend::Gain => "▲",
            Trend::Loss => "▼",
        }
    }

    /// Style applied to the indicator and change.
    pub fn style(&self) -> Style {
        match self {
            Trend::Gain => Style::default().fg(Color::Green),
            Trend::Loss => Style::default().fg(Color::Red),
        }
    }
}

/// Display model for one list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingRow {
    pub ticker: String,
    /// Change fixed to two decimals with a trailing `%`.
    pub change: String,
    pub trend: Trend,
}

impl RankingRow {
    /// Plain-text form, e.g. `AAA 5.10%`.
    pub fn label(&self) -> String {
        format!("{} {}", self.ticker, self.change)
    }
}

/// Formats a percentage change to exactly two decimals, e.g. `-3.25%`.
///
/// Halves round away from zero; `Decimal`'s own precision formatting
/// truncates.
pub fn format_change(change: Decimal) -> String {
    let rounded = change.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}%")
}

/// Builds one row per entry, preserving order.
pub fn ranking_rows(entries: &[RankingEntry], trend: Trend) -> Vec<RankingRow> {
    entries
        .iter()
        .map(|e| RankingRow {
            ticker: e.ticker.clone(),
            change: format_change(e.change),
            trend,
        })
        .collect()
}

/// Card listing one side of the rankings.
pub struct RankingsList<'a> {
    entries: &'a [RankingEntry],
    trend: Trend,
}

impl<'a> RankingsList<'a> {
    pub fn new(entries: &'a [RankingEntry], trend: Trend) -> Self {
        Self { entries, trend }
    }
}

impl Widget for RankingsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = card(self.trend.title());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = ranking_rows(self.entries, self.trend);
        let style = self.trend.style();

        let tickers: Vec<Line> = rows
            .iter()
            .map(|r| Line::from(r.ticker.clone()))
            .collect();
        let changes: Vec<Line> = rows
            .iter()
            .map(|r| {
                Line::from(vec![
                    Span::styled(format!("{} ", r.trend.indicator()), style),
                    Span::styled(r.change.clone(), style),
                ])
            })
            .collect();

        let change_width = changes.iter().map(Line::width).max().unwrap_or(0) as u16;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(change_width)])
            .split(inner);

        Paragraph::new(tickers).render(columns[0], buf);
        Paragraph::new(changes)
            .alignment(Alignment::Right)
            .render(columns[1], buf);
    }
}
