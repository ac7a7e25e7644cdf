//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::App;
use super::components::rankings::{RankingsList, Trend};
use super::components::status_bar;

/// Below this width the two cards stack vertically.
const STACK_BELOW_WIDTH: u16 = 60;

/// Renders the entire application UI.
///
/// Output depends only on `app`, so drawing the same state twice yields
/// the same frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(1), // Status bar
            Constraint::Min(3),    // Rankings grid
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    render_title(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);

    let direction = if area.width < STACK_BELOW_WIDTH {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let grid = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[2]);

    frame.render_widget(RankingsList::new(&app.top, Trend::Gain), grid[0]);
    frame.render_widget(RankingsList::new(&app.bottom, Trend::Loss), grid[1]);

    render_keybindings(frame, main_layout[3]);
}

/// Renders the title line with the poll period.
fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " StockPulse ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" every {}ms ", app.poll_interval.as_millis()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the key hints.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" q ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" quit "),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
