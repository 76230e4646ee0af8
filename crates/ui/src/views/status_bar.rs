// Status bar rendering
use crate::app::App;
use crate::models::Focus;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(area);

    render_hints(f, app, rows[0]);
    render_log_line(f, app, rows[1]);
}

// Log lines cannot reach the console while the TUI owns the screen
fn render_log_line<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let Some(line) = &app.log_line else {
        return;
    };

    let log_line = Paragraph::new(Line::from(Span::styled(
        format!(" {}", line),
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Left);

    f.render_widget(log_line, area);
}

fn render_hints<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    // A transient status message replaces the key hints
    if let Some(message) = &app.status_message {
        let is_success = message.starts_with("✅");

        let status_message = Paragraph::new(Line::from(vec![Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(if is_success { Color::Green } else { Color::Red })
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center);

        f.render_widget(status_message, area);
        return;
    }

    let mut status_items = vec![Span::styled(
        format!(
            " {} ",
            match app.focus {
                Focus::Input => "Input",
                Focus::Validate => "Validate",
                Focus::Copy => "Copy",
                Focus::Clear => "Clear",
            }
        ),
        Style::default().bg(Color::Blue).fg(Color::White),
    )];

    status_items.push(Span::raw(" "));
    let help_text = match app.focus {
        Focus::Input => "[Enter] Validate   [Ctrl+U] Clear",
        Focus::Validate => "[Enter] Validate address",
        Focus::Copy => "[Enter] Copy address",
        Focus::Clear => "[Enter] Clear input",
    };
    status_items.push(Span::styled(
        format!(" {} ", help_text),
        Style::default().fg(Color::White),
    ));

    status_items.push(Span::styled(
        " [Tab] Next control ",
        Style::default().fg(Color::White),
    ));
    if app.can_copy() {
        status_items.push(Span::styled(
            " [Ctrl+Y] Copy ",
            Style::default().fg(Color::Green),
        ));
    }
    status_items.push(Span::styled(" [F1] Help ", Style::default().fg(Color::White)));
    status_items.push(Span::styled(
        " [Ctrl+C] Quit ",
        Style::default().fg(Color::White),
    ));

    let status_bar = Paragraph::new(Line::from(status_items))
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}
