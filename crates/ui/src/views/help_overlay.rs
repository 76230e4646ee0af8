// Help overlay rendering
use super::centered_rect;
use ratatui::{
    backend::Backend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const KEY_BINDINGS: [(&str, &str); 9] = [
    ("Enter", "Validate the address, or press the focused button"),
    ("Tab / Shift+Tab", "Move between the input and the buttons"),
    ("Ctrl+Y", "Copy the address after a successful validation"),
    ("Ctrl+U", "Clear the input"),
    ("Esc", "Clear the input, or quit when it is empty"),
    ("←/→ Home/End", "Move the cursor"),
    ("Backspace/Del", "Delete characters"),
    ("F1", "Toggle this help"),
    ("Ctrl+C", "Quit"),
];

pub fn render_help_overlay<B: Backend>(f: &mut Frame<B>) {
    let size = f.size();
    let help_area = centered_rect(70, 16, size);

    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Controls",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, description) in KEY_BINDINGS {
        help_text.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" - {}", description)),
        ]));
    }

    let help_widget = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(" Help ", Style::default().fg(Color::Yellow))),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, size);
    f.render_widget(help_widget, help_area);
}
