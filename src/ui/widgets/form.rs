//! Form input widgets

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Single-line text editor with a char-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub value: String,
    /// Cursor position in chars
    pub cursor_pos: usize,
}

impl TextInput {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor_pos: value.chars().count(),
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }

    fn len_chars(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_pos);
        self.value.insert(idx, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let idx = self.byte_index(self.cursor_pos);
            self.value.remove(idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.len_chars() {
            let idx = self.byte_index(self.cursor_pos);
            self.value.remove(idx);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// Apply an editing key; returns true when the value changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                let before = self.value.len();
                self.backspace();
                before != self.value.len()
            }
            KeyCode::Delete => {
                let before = self.value.len();
                self.delete();
                before != self.value.len()
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(self.len_chars());
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = self.len_chars();
                false
            }
            _ => false,
        }
    }
}

/// One-line "< value >" rendering of a choice field
pub fn choice_line(label: &str, value: &str, focused: bool, style: Style, focused_style: Style) -> Line<'static> {
    let value_style = if focused { focused_style } else { style };
    Line::from(vec![
        Span::styled(format!("{:>14}: ", label), style),
        Span::styled(format!("< {} >", value), value_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) -> bool {
        input.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn edits_at_the_cursor() {
        let mut input = TextInput::with_value("Perra");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Left);
        assert!(press(&mut input, KeyCode::Char('e')));
        assert_eq!(input.value, "Perera");

        press(&mut input, KeyCode::Home);
        assert!(!press(&mut input, KeyCode::Backspace));
        assert!(press(&mut input, KeyCode::Delete));
        assert_eq!(input.value, "erera");
    }

    #[test]
    fn multibyte_characters_are_edited_whole() {
        let mut input = TextInput::with_value("Zoë");
        assert_eq!(input.cursor_pos, 3);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value, "Zo");
        press(&mut input, KeyCode::Char('é'));
        press(&mut input, KeyCode::Char('!'));
        assert_eq!(input.value, "Zoé!");
    }

    #[test]
    fn control_chords_are_not_inserted() {
        let mut input = TextInput::default();
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(input.value.is_empty());
    }
}
