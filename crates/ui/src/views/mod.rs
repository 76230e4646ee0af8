// UI Views module
mod alert_overlay;
mod form;
mod help_overlay;
mod history;
mod result_panel;
mod status_bar;
mod title_bar;

use crate::app::App;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

// Main render function for the UI
pub fn render_ui<B: Backend>(f: &mut Frame<B>, app: &App) {
    if app.show_help {
        help_overlay::render_help_overlay(f);
        return;
    }

    let size = f.size();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Length(3), // Address input
                Constraint::Length(1), // Buttons
                Constraint::Length(5), // Validation result
                Constraint::Min(3),    // History
                Constraint::Length(2), // Status bar
            ]
            .as_ref(),
        )
        .split(size);

    title_bar::render_title_bar(f, main_chunks[0]);
    form::render_input(f, app, main_chunks[1]);
    form::render_buttons(f, app, main_chunks[2]);
    result_panel::render_result_panel(f, app, main_chunks[3]);
    history::render_history(f, app, main_chunks[4]);
    status_bar::render_status_bar(f, app, main_chunks[5]);

    // The alert blocks everything else until dismissed
    if let Some(message) = &app.alert {
        alert_overlay::render_alert(f, message);
    }
}

/// A rectangle of at most `width` x `height`, centred in `area`
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResultSink, COPY_FAILED_MESSAGE, PROMPT_MESSAGE};
    use models::AddressError;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_prompt() {
        let app = App::new();
        let screen = render(&app);
        assert!(screen.contains("solcheck"));
        assert!(screen.contains("→"));
        assert!(screen.contains(PROMPT_MESSAGE));
        assert!(screen.contains("Validate Address"));
    }

    #[test]
    fn test_renders_valid_result() {
        let mut app = App::new();
        app.input
            .insert_str("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM");
        app.show_result(&validators::validate_address(app.input.value()));

        let screen = render(&app);
        assert!(screen.contains("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM"));
        assert!(screen.contains("✓"));
        assert!(screen.contains("Valid Solana address"));
    }

    #[test]
    fn test_renders_invalid_result() {
        let mut app = App::new();
        app.input.insert_str("invalid-address");
        app.show_result(&models::ValidationResult::invalid(
            AddressError::InvalidCharacterSet,
        ));

        let screen = render(&app);
        assert!(screen.contains("✗"));
        assert!(screen.contains("Address contains invalid base58 characters"));
    }

    #[test]
    fn test_renders_alert_over_form() {
        let mut app = App::new();
        app.alert = Some(COPY_FAILED_MESSAGE.to_string());

        let screen = render(&app);
        assert!(screen.contains(COPY_FAILED_MESSAGE));
    }

    #[test]
    fn test_renders_log_line_in_status_bar() {
        let mut app = App::new();
        assert!(!render(&app).contains("clipboard tool exited"));

        app.log_line = Some("[12:00:00] ⚠️ clipboard tool exited with 1".to_string());
        let screen = render(&app);
        let last_row = screen.lines().last().unwrap_or_default();
        assert!(last_row.contains("clipboard tool exited with 1"));
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(60, 4, area);
        assert_eq!(rect, Rect::new(0, 3, 40, 4));
    }
}
