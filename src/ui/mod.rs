//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod layout;
mod notifications;

use crate::app::App;
use crate::backend::BackendClientTrait;
use ratatui::Frame;

/// Main draw function
pub fn draw<C: BackendClientTrait>(frame: &mut Frame, app: &App<C>) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    form::draw(frame, content_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlay goes last so it sits on top of the form
    notifications::draw(frame, &app.state.notifications);
}
