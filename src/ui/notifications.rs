//! Notification overlay rendering
//!
//! Draws the visible notifications stacked in the top-right corner, newest at
//! the bottom. Called after the main UI so the stack sits on top.

use crate::notification::NotificationQueue;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Height of one notification entry (content line + borders)
const ENTRY_HEIGHT: u16 = 3;

/// Margin from the frame edges
const MARGIN: u16 = 2;

/// Render the notification stack over the current frame content
pub fn draw(frame: &mut Frame, notifications: &NotificationQueue) {
    if notifications.is_empty() {
        return;
    }

    let frame_area = frame.area();

    for (idx, notif) in notifications.visible().enumerate() {
        let style = notif.severity.style();

        // Width: message + padding (1 char each side) + borders
        let width = (notif.message.len() as u16 + 4)
            .min(frame_area.width.saturating_sub(MARGIN * 2));
        let x = frame_area.width.saturating_sub(width + MARGIN);
        let y = MARGIN + idx as u16 * ENTRY_HEIGHT;

        let entry_area = Rect {
            x,
            y,
            width,
            height: ENTRY_HEIGHT,
        };

        // Skip entries that no longer fit the frame
        if entry_area.width < 5 || entry_area.bottom() > frame_area.height {
            continue;
        }

        // Clear background for floating effect
        frame.render_widget(Clear, entry_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style.border).bg(style.bg))
            .style(Style::default().bg(style.bg));

        let text = Line::from(Span::styled(
            format!(" {} ", notif.message),
            Style::default().fg(style.fg).bg(style.bg),
        ));

        frame.render_widget(Paragraph::new(text).block(block), entry_area);
    }
}
