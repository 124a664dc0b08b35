//! Input event handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application input events
#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Event handler for terminal input
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event
    pub fn next(&self) -> Option<AppEvent> {
        if event::poll(self.tick_rate).ok()? {
            match event::read().ok()? {
                // Windows reports releases too
                Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
                Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
                _ => None,
            }
        } else {
            Some(AppEvent::Tick)
        }
    }
}

/// Check if a key event matches a key with modifiers
pub fn is_key_with_mod(event: &KeyEvent, code: KeyCode, modifiers: KeyModifiers) -> bool {
    event.code == code && event.modifiers == modifiers
}

/// Ctrl+C always quits, even inside dialogs
pub fn is_force_quit(event: &KeyEvent) -> bool {
    is_key_with_mod(event, KeyCode::Char('c'), KeyModifiers::CONTROL)
}

/// Check for cursor movement keys (returns delta)
pub fn navigation_delta(event: &KeyEvent) -> Option<i32> {
    match (event.code, event.modifiers) {
        // Arrow keys (primary)
        (KeyCode::Up, KeyModifiers::NONE) => Some(-1),
        (KeyCode::Down, KeyModifiers::NONE) => Some(1),
        (KeyCode::Home, KeyModifiers::NONE) => Some(i32::MIN),
        (KeyCode::End, KeyModifiers::NONE) => Some(i32::MAX),

        // Vi-style (alternative)
        (KeyCode::Char('k'), KeyModifiers::NONE) => Some(-1),
        (KeyCode::Char('j'), KeyModifiers::NONE) => Some(1),
        (KeyCode::Char('g'), KeyModifiers::NONE) => Some(i32::MIN),
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Some(i32::MAX),

        _ => None,
    }
}

/// Apply a navigation delta to a cursor over `len` rows
pub fn apply_delta(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match delta {
        i32::MIN => 0,
        i32::MAX => len - 1,
        d if d < 0 => current.saturating_sub(d.unsigned_abs() as usize),
        d => (current + d as usize).min(len - 1),
    }
}

/// Check for tab number keys (1-2)
pub fn tab_number(event: &KeyEvent, tab_count: usize) -> Option<usize> {
    match event.code {
        KeyCode::Char(c @ '1'..='9') if event.modifiers.is_empty() => {
            let index = c as usize - '1' as usize;
            (index < tab_count).then_some(index)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vi_and_arrow_keys_move_the_cursor() {
        assert_eq!(navigation_delta(&key(KeyCode::Char('j'))), Some(1));
        assert_eq!(navigation_delta(&key(KeyCode::Up)), Some(-1));
        assert_eq!(navigation_delta(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn delta_is_clamped_to_rows() {
        assert_eq!(apply_delta(0, -1, 5), 0);
        assert_eq!(apply_delta(4, 1, 5), 4);
        assert_eq!(apply_delta(2, i32::MAX, 5), 4);
        assert_eq!(apply_delta(2, i32::MIN, 5), 0);
        assert_eq!(apply_delta(3, 1, 0), 0);
    }

    #[test]
    fn tab_numbers_are_bounded() {
        assert_eq!(tab_number(&key(KeyCode::Char('1')), 2), Some(0));
        assert_eq!(tab_number(&key(KeyCode::Char('2')), 2), Some(1));
        assert_eq!(tab_number(&key(KeyCode::Char('3')), 2), None);
    }

    #[test]
    fn ctrl_c_is_force_quit() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_force_quit(&ctrl_c));
        assert!(!is_force_quit(&key(KeyCode::Char('c'))));
    }
}
