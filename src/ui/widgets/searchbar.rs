//! Search/filter bar widget

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::form::TextInput;

/// What a key did to the search bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// Query text changed
    Changed,
    /// Editing finished, query kept
    Closed,
    /// Query cleared and editing finished
    Cleared,
    Ignored,
}

/// Search bar state
#[derive(Debug, Default)]
pub struct SearchBar {
    input: TextInput,
    pub active: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.input.value
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Handle a key while the bar is active
    pub fn handle_key(&mut self, key: KeyEvent) -> SearchEvent {
        match key.code {
            KeyCode::Enter => {
                self.deactivate();
                SearchEvent::Closed
            }
            KeyCode::Esc => {
                self.deactivate();
                let had_query = !self.input.value.is_empty();
                self.clear();
                if had_query {
                    SearchEvent::Cleared
                } else {
                    SearchEvent::Closed
                }
            }
            _ if self.input.handle_key(key) => SearchEvent::Changed,
            _ => SearchEvent::Ignored,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, style: Style, focused_style: Style) {
        let border_style = if self.active { focused_style } else { style };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Filter (/ to edit, Esc to clear) ");

        let display_text = if self.input.value.is_empty() && !self.active {
            "Type to filter...".to_string()
        } else {
            self.input.value.clone()
        };

        let paragraph = Paragraph::new(display_text)
            .block(block)
            .style(style);

        frame.render_widget(paragraph, area);

        // Show cursor if active
        if self.active {
            frame.set_cursor_position((
                area.x + 1 + self.input.cursor_pos as u16,
                area.y + 1,
            ));
        }
    }
}
