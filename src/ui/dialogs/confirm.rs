//! Confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;

/// How a confirmation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation<T> {
    Confirmed(T),
    Cancelled,
}

/// Yes/No dialog carrying the payload of the action it guards
pub struct ConfirmDialog<T> {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub selected: bool, // true = confirm selected
    payload: Option<T>,
}

impl<T> ConfirmDialog<T> {
    pub fn new(title: &str, message: &str, payload: T) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            confirm_label: "Yes".to_string(),
            cancel_label: "No".to_string(),
            selected: false,
            payload: Some(payload),
        }
    }

    pub fn with_labels(mut self, confirm: &str, cancel: &str) -> Self {
        self.confirm_label = confirm.to_string();
        self.cancel_label = cancel.to_string();
        self
    }

    fn finish(&mut self, confirmed: bool) -> Option<Confirmation<T>> {
        match self.payload.take() {
            Some(payload) if confirmed => Some(Confirmation::Confirmed(payload)),
            _ => Some(Confirmation::Cancelled),
        }
    }

    /// Handle a key; `Some` means the dialog is done
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Confirmation<T>> {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.selected = !self.selected;
                None
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => self.finish(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.finish(false),
            KeyCode::Enter => self.finish(self.selected),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let dialog_area = DialogLayout::centered(area, 50, 10).dialog;

        // Clear background
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(theme.border_focused());

        frame.render_widget(block.clone(), dialog_area);

        let inner = block.inner(dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(3),    // Message
                Constraint::Length(1), // Buttons
            ])
            .split(inner);

        let message = Paragraph::new(self.message.clone())
            .style(theme.normal())
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let yes_style = if self.selected {
            theme.error().add_modifier(Modifier::BOLD)
        } else {
            theme.dim()
        };
        let no_style = if !self.selected {
            theme.accent().add_modifier(Modifier::BOLD)
        } else {
            theme.dim()
        };

        let buttons = Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[ {} ]", self.confirm_label), yes_style),
            Span::raw("    "),
            Span::styled(format!("[ {} ]", self.cancel_label), no_style),
        ]);

        frame.render_widget(Paragraph::new(buttons), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_defaults_to_cancel() {
        let mut dialog = ConfirmDialog::new("Delete", "Delete 2 employees?", vec![1, 2]);
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(Confirmation::Cancelled));
    }

    #[test]
    fn confirming_hands_back_payload() {
        let mut dialog = ConfirmDialog::new("Delete", "Delete 2 employees?", vec![1, 2]);
        assert_eq!(dialog.handle_key(key(KeyCode::Right)), None);
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)),
            Some(Confirmation::Confirmed(vec![1, 2]))
        );
    }

    #[test]
    fn y_and_n_shortcuts() {
        let mut dialog = ConfirmDialog::new("Delete", "?", 5);
        assert_eq!(dialog.handle_key(key(KeyCode::Char('y'))), Some(Confirmation::Confirmed(5)));

        let mut dialog = ConfirmDialog::new("Delete", "?", 5);
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), Some(Confirmation::Cancelled));
    }
}
