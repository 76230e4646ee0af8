// Validation result region
use crate::app::App;
use crate::models::ValidationState;
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

fn state_color(state: &ValidationState) -> Color {
    match state {
        ValidationState::Prompt => Color::Gray,
        ValidationState::Pending => Color::Yellow,
        ValidationState::Valid { .. } => Color::Green,
        ValidationState::Invalid { .. } => Color::Red,
    }
}

pub fn render_result_panel<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let color = state_color(&app.state);

    let icon = if app.state == ValidationState::Pending {
        app.spinner.frame()
    } else {
        app.state.icon()
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            icon,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.state.message(), Style::default().fg(color)),
    ])];

    if let ValidationState::Valid { warnings } = &app.state {
        if !warnings.is_empty() {
            lines.push(Line::from(Span::styled(
                "Double-check the characters listed above before sending funds",
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .title(Span::styled(" Result ", Style::default().fg(color))),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(panel, area);
}
