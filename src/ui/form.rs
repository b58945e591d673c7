//! Contact form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use super::layout::centered_rect;
use crate::app::App;
use crate::backend::BackendClientTrait;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Form box width (capped by the terminal width)
const FORM_WIDTH: u16 = 48;

/// Form box height: two fields + button row + borders and padding
const FORM_HEIGHT: u16 = 2 + 3 + 3 + BUTTON_HEIGHT;

/// Draw the contact form centered in the content area
pub fn draw<C: BackendClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let form_area = centered_rect(area, FORM_WIDTH, FORM_HEIGHT);
    let form = &app.state.form;

    let block = Block::default()
        .title(" Contact Intake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Address
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(form_area);

    for (idx, field) in FieldId::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field.label(),
            form.data().field(*field),
            form.active_field() == idx,
        );
    }

    render_button(
        frame,
        chunks[2],
        "Submit",
        form.is_submit_active(),
        Some(Color::Green),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackendClientTrait;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App<MockBackendClientTrait>) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw(f, area, app);
            })
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_renders_labels_and_submit() {
        let app = App::with_client(MockBackendClientTrait::new());
        let output = render_to_string(&app);
        assert!(output.contains("Contact Intake"));
        assert!(output.contains("Name"));
        assert!(output.contains("Address"));
        assert!(output.contains("Submit"));
    }

    #[test]
    fn test_renders_typed_values() {
        let mut app = App::with_client(MockBackendClientTrait::new());
        for c in "Alice".chars() {
            app.state.form.input_char(c, false);
        }
        let output = render_to_string(&app);
        assert!(output.contains("Alice"));
    }

    #[test]
    fn test_inactive_empty_field_shows_placeholder() {
        let app = App::with_client(MockBackendClientTrait::new());
        // field 0 is active, field 1 is not
        let output = render_to_string(&app);
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = App::with_client(MockBackendClientTrait::new());
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw(f, area, &app);
            })
            .unwrap();
    }
}
