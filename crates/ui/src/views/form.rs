// Address input and action buttons
use crate::app::App;
use crate::components::Button;
use crate::models::Focus;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

// Render the address input box and place the terminal cursor in it
pub fn render_input<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor = app.input.cursor();

    // Scroll horizontally so the cursor always stays visible
    let offset = if inner_width > 0 && cursor >= inner_width {
        cursor + 1 - inner_width
    } else {
        0
    };
    let visible: String = app
        .input
        .value()
        .chars()
        .skip(offset)
        .take(inner_width)
        .collect();

    let focused = app.focus == Focus::Input && app.alert.is_none();
    let border_color = if focused { Color::Yellow } else { Color::White };

    let (text, text_style) = if app.input.value().is_empty() {
        (
            "Enter Solana address...".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (visible, Style::default().fg(Color::White))
    };

    let input = Paragraph::new(Span::styled(text, text_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Address ", Style::default().fg(Color::Cyan))),
    );
    f.render_widget(input, area);

    if focused && inner_width > 0 {
        f.set_cursor(area.x + 1 + (cursor - offset) as u16, area.y + 1);
    }
}

// Render the row of action buttons
pub fn render_buttons<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Length(22),
                Constraint::Length(1),
                Constraint::Length(16),
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    let copy_label = if app.copy_in_progress {
        "Copying..."
    } else if app.is_copied() {
        "Copied"
    } else {
        "Copy Address"
    };

    let validate = Button::new("Validate Address")
        .focused(app.focus == Focus::Validate)
        .enabled(app.can_validate());
    let copy = Button::new(copy_label)
        .focused(app.focus == Focus::Copy)
        .enabled(app.can_copy());
    let clear = Button::new("Clear")
        .focused(app.focus == Focus::Clear)
        .enabled(app.show_clear());

    f.render_widget(validate.render(), chunks[0]);
    f.render_widget(copy.render(), chunks[2]);
    f.render_widget(clear.render(), chunks[4]);
}
