//! Keyboard shortcut definitions

use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keyboard shortcut configuration
#[derive(Debug, Clone)]
pub struct KeyBindings {
    // Global
    pub quit: KeyBind,
    pub help: KeyBind,
    pub refresh: KeyBind,

    // Tab navigation
    pub next_tab: KeyBind,
    pub prev_tab: KeyBind,

    // Table navigation (arrow keys primary, vi alternative)
    pub up: KeyBind,
    pub down: KeyBind,
    pub next_page: KeyBind,
    pub prev_page: KeyBind,
    pub next_column: KeyBind,
    pub prev_column: KeyBind,
    pub more_rows: KeyBind,
    pub fewer_rows: KeyBind,

    // Actions
    pub sort: KeyBind,
    pub select: KeyBind,
    pub select_all: KeyBind,
    pub delete: KeyBind,
    pub edit: KeyBind,
    pub new_item: KeyBind,
    pub filter: KeyBind,
    pub clear_filter: KeyBind,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            // Global
            quit: KeyBind::new(KeyCode::Char('q'), KeyModifiers::NONE),
            help: KeyBind::new(KeyCode::Char('?'), KeyModifiers::NONE),
            refresh: KeyBind::new(KeyCode::Char('r'), KeyModifiers::NONE),

            // Tab navigation
            next_tab: KeyBind::new(KeyCode::Tab, KeyModifiers::NONE),
            prev_tab: KeyBind::new(KeyCode::BackTab, KeyModifiers::SHIFT),

            // Table navigation
            up: KeyBind::new(KeyCode::Up, KeyModifiers::NONE),
            down: KeyBind::new(KeyCode::Down, KeyModifiers::NONE),
            next_page: KeyBind::new(KeyCode::PageDown, KeyModifiers::NONE),
            prev_page: KeyBind::new(KeyCode::PageUp, KeyModifiers::NONE),
            next_column: KeyBind::new(KeyCode::Char(']'), KeyModifiers::NONE),
            prev_column: KeyBind::new(KeyCode::Char('['), KeyModifiers::NONE),
            more_rows: KeyBind::new(KeyCode::Char('+'), KeyModifiers::NONE),
            fewer_rows: KeyBind::new(KeyCode::Char('-'), KeyModifiers::NONE),

            // Actions
            sort: KeyBind::new(KeyCode::Char('s'), KeyModifiers::NONE),
            select: KeyBind::new(KeyCode::Char(' '), KeyModifiers::NONE),
            select_all: KeyBind::new(KeyCode::Char('a'), KeyModifiers::NONE),
            delete: KeyBind::new(KeyCode::Char('d'), KeyModifiers::NONE),
            edit: KeyBind::new(KeyCode::Char('e'), KeyModifiers::NONE),
            new_item: KeyBind::new(KeyCode::Char('n'), KeyModifiers::NONE),
            filter: KeyBind::new(KeyCode::Char('/'), KeyModifiers::NONE),
            clear_filter: KeyBind::new(KeyCode::Esc, KeyModifiers::NONE),
        }
    }
}

impl KeyBindings {
    /// Defaults with overrides from the settings file applied.
    ///
    /// Keys are action names (`"delete"`, `"next_page"`) and values are key
    /// strings such as `"x"`, `"ctrl+d"` or `"pagedown"`. Unknown actions and
    /// unparseable keys are logged and skipped.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut keys = Self::default();
        for (action, key) in overrides {
            let Some(bind) = KeyBind::parse(key) else {
                tracing::warn!("Ignoring unrecognised key {:?} for {}", key, action);
                continue;
            };
            match keys.slot_mut(action) {
                Some(slot) => *slot = bind,
                None => tracing::warn!("Ignoring binding for unknown action {}", action),
            }
        }
        keys
    }

    fn slot_mut(&mut self, action: &str) -> Option<&mut KeyBind> {
        let slot = match action {
            "quit" => &mut self.quit,
            "help" => &mut self.help,
            "refresh" => &mut self.refresh,
            "next_tab" => &mut self.next_tab,
            "prev_tab" => &mut self.prev_tab,
            "up" => &mut self.up,
            "down" => &mut self.down,
            "next_page" => &mut self.next_page,
            "prev_page" => &mut self.prev_page,
            "next_column" => &mut self.next_column,
            "prev_column" => &mut self.prev_column,
            "more_rows" => &mut self.more_rows,
            "fewer_rows" => &mut self.fewer_rows,
            "sort" => &mut self.sort,
            "select" => &mut self.select,
            "select_all" => &mut self.select_all,
            "delete" => &mut self.delete,
            "edit" => &mut self.edit,
            "new_item" => &mut self.new_item,
            "filter" => &mut self.filter,
            "clear_filter" => &mut self.clear_filter,
            _ => return None,
        };
        Some(slot)
    }
}

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Parse a key string like `"q"`, `"ctrl+s"`, `"shift+tab"` or `"f5"`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        // A lone '+' or a trailing "++" names the plus key itself
        let (prefix, key_part) = match s.strip_suffix("++") {
            Some(prefix) => (prefix, "+"),
            None if s == "+" => ("", "+"),
            None => match s.rsplit_once('+') {
                Some((prefix, key)) => (prefix, key),
                None => ("", s),
            },
        };
        if key_part.is_empty() {
            return None;
        }

        let mut modifiers = KeyModifiers::NONE;
        for part in prefix.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                "alt" => modifiers |= KeyModifiers::ALT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "escape" | "esc" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backtab" => {
                modifiers |= KeyModifiers::SHIFT;
                KeyCode::BackTab
            }
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "insert" | "ins" => KeyCode::Insert,
            "delete" | "del" => KeyCode::Delete,
            name => match name.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                Some(n @ 1..=12) => KeyCode::F(n),
                _ => {
                    let mut chars = key_part.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => KeyCode::Char(c),
                        _ => return None,
                    }
                }
            },
        };
        Some(Self::new(code, modifiers))
    }

    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        // Shift is implied by the character for symbols like '+' and '?'
        let modifiers = match code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        let expected = match self.code {
            KeyCode::Char(_) => self.modifiers.difference(KeyModifiers::SHIFT),
            _ => self.modifiers,
        };
        self.code == code && expected == modifiers
    }

    pub fn matches_event(&self, key: &KeyEvent) -> bool {
        self.matches(key.code, key.modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_with_or_without_shift() {
        let keys = KeyBindings::default();
        assert!(keys.more_rows.matches(KeyCode::Char('+'), KeyModifiers::SHIFT));
        assert!(keys.help.matches(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(!keys.quit.matches(KeyCode::Char('q'), KeyModifiers::CONTROL));
    }

    #[test]
    fn back_tab_keeps_shift() {
        let keys = KeyBindings::default();
        assert!(keys.prev_tab.matches(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(!keys.prev_tab.matches(KeyCode::BackTab, KeyModifiers::NONE));
    }

    #[test]
    fn parses_key_strings() {
        let bind = KeyBind::parse("ctrl+d").unwrap();
        assert_eq!((bind.code, bind.modifiers), (KeyCode::Char('d'), KeyModifiers::CONTROL));

        let bind = KeyBind::parse("PageDown").unwrap();
        assert_eq!(bind.code, KeyCode::PageDown);

        let bind = KeyBind::parse("shift+tab").unwrap();
        assert_eq!((bind.code, bind.modifiers), (KeyCode::BackTab, KeyModifiers::SHIFT));

        assert_eq!(KeyBind::parse("+").unwrap().code, KeyCode::Char('+'));
        assert_eq!(KeyBind::parse("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(KeyBind::parse("G").unwrap().code, KeyCode::Char('G'));
        assert!(KeyBind::parse("hyper+x").is_none());
        assert!(KeyBind::parse("xyz").is_none());
        assert!(KeyBind::parse("").is_none());
    }

    #[test]
    fn overrides_replace_defaults() {
        let overrides = BTreeMap::from([
            ("delete".to_string(), "x".to_string()),
            ("down".to_string(), "ctrl+n".to_string()),
            ("teleport".to_string(), "t".to_string()),
            ("quit".to_string(), "not a key".to_string()),
        ]);
        let keys = KeyBindings::with_overrides(&overrides);

        assert!(keys.delete.matches(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(!keys.delete.matches(KeyCode::Char('d'), KeyModifiers::NONE));
        assert!(keys.down.matches(KeyCode::Char('n'), KeyModifiers::CONTROL));
        // invalid entries leave the default in place
        assert!(keys.quit.matches(KeyCode::Char('q'), KeyModifiers::NONE));
    }
}
