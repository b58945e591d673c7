//! Layout helpers and status bar

use crate::app::App;
use crate::backend::BackendClientTrait;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the frame into content and the bottom status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a fixed-size rect inside the given area, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Draw the status bar with key hints and the target endpoint
pub fn draw_status_bar<C: BackendClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let mut spans = vec![Span::styled(
        " Tab:next  Enter:submit  ^S:submit  Esc:quit",
        Style::default().fg(Color::DarkGray),
    )];

    let host = endpoint_host(app.endpoint());
    if !host.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("→ {host}"),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Host portion of the endpoint URL, for display
fn endpoint_host(endpoint: &str) -> &str {
    let rest = endpoint
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(endpoint);
    rest.split('/').next().unwrap_or(rest)
}
