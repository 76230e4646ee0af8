// Button component
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// A single-line button for the form
pub struct Button {
    pub label: String,
    pub is_focused: bool,
    pub is_enabled: bool,
}

impl Button {
    pub fn new(label: &str) -> Self {
        Button {
            label: label.to_string(),
            is_focused: false,
            is_enabled: true,
        }
    }

    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;
        self
    }

    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    pub fn style(&self) -> Style {
        let (fg, bg) = match (self.is_focused, self.is_enabled) {
            (true, true) => (Color::Black, Color::Yellow),
            (true, false) => (Color::Black, Color::DarkGray),
            (false, true) => (Color::White, Color::Blue),
            (false, false) => (Color::DarkGray, Color::Black),
        };

        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }

    pub fn render(&self) -> Paragraph {
        Paragraph::new(Line::from(vec![Span::styled(
            format!(" {} ", self.label),
            self.style(),
        )]))
        .alignment(Alignment::Center)
    }
}
