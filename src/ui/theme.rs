//! Color theme definitions

use ratatui::style::{Color, Modifier, Style};

/// Application color theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub fg_bright: Color,

    // Accent colors
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub checked: Color,
    pub highlight: Color,

    // Tab colors
    pub tab_active: Color,
    pub tab_inactive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Base colors
            bg: Color::Reset,
            fg: Color::White,
            fg_dim: Color::DarkGray,
            fg_bright: Color::White,

            // Accent colors
            accent: Color::Cyan,

            // Status colors
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,

            // UI elements
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection: Color::Blue,
            checked: Color::Magenta,
            highlight: Color::Yellow,

            // Tab colors
            tab_active: Color::Cyan,
            tab_inactive: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Theme by settings name; unknown names fall back to the default
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "default" | "dark" => Self::default(),
            other => {
                tracing::warn!("Unknown theme '{}', using default", other);
                Self::default()
            }
        }
    }

    /// Light theme variant
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            fg_dim: Color::DarkGray,
            fg_bright: Color::Black,
            accent: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            border: Color::Gray,
            border_focused: Color::Blue,
            selection: Color::LightBlue,
            checked: Color::Magenta,
            highlight: Color::Yellow,
            tab_active: Color::Blue,
            tab_inactive: Color::Gray,
        }
    }

    // Style helpers
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    pub fn selected(&self) -> Style {
        Style::default().bg(self.selection).fg(self.fg_bright)
    }

    /// Rows ticked for a bulk action
    pub fn checked(&self) -> Style {
        Style::default().fg(self.checked)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.highlight).add_modifier(Modifier::BOLD)
    }

    pub fn header(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn tab_active(&self) -> Style {
        Style::default().fg(self.tab_active).add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.tab_inactive)
    }

    pub fn status_style(&self, status: &str) -> Style {
        match status.to_lowercase().as_str() {
            "active" | "confirmed" | "completed" => self.success(),
            "on leave" | "pending" => self.warning(),
            "terminated" | "cancelled" => self.error(),
            _ => self.normal(),
        }
    }
}
