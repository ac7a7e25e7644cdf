//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, FeedStatus};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let feed_status = app.feed_status();
    let status_color = match feed_status {
        FeedStatus::Live => Color::Green,
        FeedStatus::Stale => Color::Yellow,
        FeedStatus::Waiting => Color::Gray,
    };

    let failures_span = if app.failure_count > 0 {
        Span::styled(
            format!(" {} failed ", app.failure_count),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::raw("")
    };

    let error_span = if let Some(ref error) = app.last_error {
        Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", feed_status.label()),
            Style::default().fg(status_color),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", app.source_label),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│"),
        Span::raw(format!(" {} updates ", app.snapshot_count)),
        failures_span,
        Span::raw("│"),
        error_span,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
