//! Create/edit dialog for any form model

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::forms::{FieldKind, FormModel, FormState};
use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::form::{choice_line, TextInput};

const LABEL_WIDTH: u16 = 16;

/// Editor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

/// Result of form dialog interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult<M> {
    Save(M),
    Cancel,
}

/// Modal form over a [`FormState`]
pub struct FormDialog<M: FormModel> {
    pub mode: EditorMode,
    noun: &'static str,
    form: FormState<M>,
    editor: TextInput,
}

impl<M: FormModel> FormDialog<M> {
    pub fn create(noun: &'static str, values: M) -> Self {
        Self::new(EditorMode::Create, noun, values)
    }

    pub fn edit(noun: &'static str, values: M) -> Self {
        Self::new(EditorMode::Edit, noun, values)
    }

    fn new(mode: EditorMode, noun: &'static str, values: M) -> Self {
        let form = FormState::new(values);
        let editor = TextInput::with_value(&form.value(form.focused().key));
        Self { mode, noun, form, editor }
    }

    #[cfg(test)]
    pub fn form(&self) -> &FormState<M> {
        &self.form
    }

    fn load_editor(&mut self) {
        self.editor = TextInput::with_value(&self.form.value(self.form.focused().key));
    }

    fn try_submit(&mut self) -> Option<FormResult<M>> {
        match self.form.submit() {
            Ok(values) => Some(FormResult::Save(values)),
            Err(errors) => {
                if let Some(first) = M::fields().iter().find(|f| errors.contains_key(f.key)) {
                    self.form.focus_field(first.key);
                    self.load_editor();
                }
                None
            }
        }
    }

    /// Handle key event; `Some` means the dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormResult<M>> {
        match key.code {
            KeyCode::Esc => return Some(FormResult::Cancel),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.try_submit();
            }
            KeyCode::Enter => return self.try_submit(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.reset();
                self.load_editor();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                self.load_editor();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                self.load_editor();
            }
            _ => match self.form.focused().kind {
                FieldKind::Choice(_) => match key.code {
                    KeyCode::Left => self.form.cycle_choice(false),
                    KeyCode::Right | KeyCode::Char(' ') => self.form.cycle_choice(true),
                    _ => {}
                },
                FieldKind::Text => {
                    if self.editor.handle_key(key) {
                        let field = self.form.focused().key;
                        self.form.change(field, &self.editor.value);
                    }
                }
            },
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let fields = M::fields();
        let area = frame.area();
        // Two lines per field (value + error) plus hints
        let height = (fields.len() as u16) * 2 + 6;
        let dialog_area = DialogLayout::centered(area, 72, height).dialog;

        frame.render_widget(Clear, dialog_area);

        let verb = match self.mode {
            EditorMode::Create => "New",
            EditorMode::Edit => "Edit",
        };
        let dirty = if self.form.is_dirty() { " *" } else { "" };
        let block = Block::default()
            .title(format!(" {} {}{} ", verb, self.noun, dirty))
            .borders(Borders::ALL)
            .border_style(theme.border_focused())
            .style(theme.normal());

        frame.render_widget(block.clone(), dialog_area);
        let inner = block.inner(dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),    // Fields
                Constraint::Length(1), // Hints
            ])
            .split(inner);

        let mut lines = Vec::with_capacity(fields.len() * 2);
        let mut cursor = None;
        for (i, spec) in fields.iter().enumerate() {
            let focused = i == self.form.focus_index();
            match spec.kind {
                FieldKind::Choice(_) => {
                    lines.push(choice_line(
                        spec.label,
                        &self.form.value(spec.key),
                        focused,
                        theme.normal(),
                        theme.highlight(),
                    ));
                }
                FieldKind::Text => {
                    let value_style = if focused {
                        theme.normal().add_modifier(Modifier::UNDERLINED)
                    } else {
                        theme.normal()
                    };
                    let value = if focused {
                        self.editor.value.clone()
                    } else {
                        self.form.value(spec.key)
                    };
                    if focused {
                        cursor = Some((
                            chunks[0].x + LABEL_WIDTH + self.editor.cursor_pos as u16,
                            chunks[0].y + (lines.len() as u16),
                        ));
                    }
                    lines.push(Line::from(vec![
                        Span::styled(format!("{:>14}: ", spec.label), theme.normal()),
                        Span::styled(value, value_style),
                    ]));
                }
            }

            let error = self.form.visible_error(spec.key).unwrap_or("");
            lines.push(Line::from(Span::styled(
                format!("{:>16}{}", "", error),
                theme.error(),
            )));
        }

        frame.render_widget(Paragraph::new(lines), chunks[0]);

        let hints = "Tab/↑↓=field  ←→/Space=option  Enter/Ctrl+S=save  Ctrl+R=revert  Esc=cancel";
        frame.render_widget(
            Paragraph::new(hints).style(theme.dim()).wrap(Wrap { trim: true }),
            chunks[1],
        );

        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeForm, EmployeeStatus};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut FormDialog<EmployeeForm>, text: &str) {
        for c in text.chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn invalid_submit_stays_open_on_first_error() {
        let mut dialog = FormDialog::create("Employee", EmployeeForm::default());
        type_text(&mut dialog, "Asha");
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(dialog.form().focused().key, "email");
        assert_eq!(dialog.form().visible_error("email"), Some("Email is required"));
    }

    #[test]
    fn filled_form_saves() {
        let mut dialog = FormDialog::create("Employee", EmployeeForm::default());
        type_text(&mut dialog, "Asha Fernando");
        dialog.handle_key(key(KeyCode::Tab));
        type_text(&mut dialog, "asha@example.com");
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Tab));
        type_text(&mut dialog, "Payroll");

        match dialog.handle_key(key(KeyCode::Enter)) {
            Some(FormResult::Save(values)) => {
                assert_eq!(values.full_name, "Asha Fernando");
                assert_eq!(values.department, "Payroll");
            }
            other => panic!("expected save, got {:?}", other),
        }
    }

    #[test]
    fn choice_fields_cycle_with_arrows() {
        let mut dialog = FormDialog::create("Employee", EmployeeForm::default());
        dialog.form.focus_field("status");
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.form().values().status, EmployeeStatus::OnLeave.to_string());
        dialog.handle_key(key(KeyCode::Left));
        dialog.handle_key(key(KeyCode::Left));
        assert_eq!(dialog.form().values().status, EmployeeStatus::Terminated.to_string());
    }

    #[test]
    fn escape_cancels() {
        let mut dialog = FormDialog::create("Employee", EmployeeForm::default());
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), Some(FormResult::Cancel));
    }

    #[test]
    fn ctrl_r_reverts_to_initial_values() {
        let mut initial = EmployeeForm::default();
        initial.full_name = "Nimal Perera".to_string();
        let mut dialog = FormDialog::edit("Employee", initial.clone());
        type_text(&mut dialog, " Jr");
        dialog.handle_key(key(KeyCode::Tab));
        assert!(dialog.form().is_dirty());

        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(dialog.handle_key(ctrl_r), None);
        assert!(!dialog.form().is_dirty());
        assert_eq!(dialog.form().focused().key, "full_name");
        assert_eq!(dialog.editor.value, "Nimal Perera");
        assert_eq!(dialog.form().visible_error("email"), None);
    }
}
