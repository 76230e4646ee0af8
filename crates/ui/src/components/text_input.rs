// Single-line text input component
use crate::models::InputSource;

/// Editable text with a cursor, counted in characters
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input holding `value` with the cursor at the end
    pub fn with_value(value: &str) -> Self {
        TextInput {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    /// Insert pasted text; line breaks are dropped
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(c);
        }
    }

    /// Remove the character before the cursor. Returns true if anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.value.remove(idx);
        true
    }

    /// Remove the character under the cursor. Returns true if anything changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.value.remove(idx);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

impl InputSource for TextInput {
    fn current_text(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);

        assert!(input.backspace());
        assert_eq!(input.value(), "ac");
        input.move_home();
        assert!(!input.backspace());
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::with_value("abc");
        assert!(!input.delete());
        input.move_home();
        assert!(input.delete());
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::with_value("é1");
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.value(), "éx1");
        assert!(input.backspace());
        assert!(input.backspace());
        assert_eq!(input.value(), "1");
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut input = TextInput::new();
        input.insert_str("  abc\r\n");
        assert_eq!(input.value(), "  abc");
        assert!(!input.is_blank());

        input.clear();
        assert!(input.is_blank());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::with_value("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        assert_eq!(input.cursor(), 2);
    }
}
