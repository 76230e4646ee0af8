// Recent validations and copy events
use crate::app::App;
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

pub fn render_history<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let capacity = area.height.saturating_sub(2) as usize;

    // Newest entries last, only as many as fit
    let start = app.logs.len().saturating_sub(capacity);
    let items: Vec<ListItem> = app.logs[start..]
        .iter()
        .map(|entry| {
            let color = if entry.contains("Invalid") || entry.contains("failed") {
                Color::Red
            } else if entry.contains("Valid") || entry.contains("Copied") {
                Color::Green
            } else {
                Color::White
            };
            ListItem::new(Span::styled(entry.clone(), Style::default().fg(color)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(" History ", Style::default().fg(Color::Cyan))),
    );

    f.render_widget(list, area);
}
