// Title bar rendering
use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_title_bar<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let subtitle = Paragraph::new(Line::from(vec![
        Span::styled("Solana Address Validator", Style::default().fg(Color::White)),
        Span::styled(
            "  base58 · 44 characters",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                " solcheck ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center),
    );

    f.render_widget(subtitle, area);
}
