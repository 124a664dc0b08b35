//! Screen layout management

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Standard application layout areas
pub struct AppLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl AppLayout {
    /// Create layout from terminal area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tabs
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            content: chunks[1],
            status: chunks[2],
        }
    }
}

/// Records tab: filter bar, table, pagination footer
pub struct ListLayout {
    pub filter: Rect,
    pub table: Rect,
    pub footer: Rect,
}

impl ListLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter bar
                Constraint::Min(5),    // Table
                Constraint::Length(1), // Pagination
            ])
            .split(area);

        Self {
            filter: chunks[0],
            table: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Dialog/popup centered layout
pub struct DialogLayout {
    pub dialog: Rect,
}

impl DialogLayout {
    /// Create centered dialog with fixed dimensions
    pub fn centered(area: Rect, width: u16, height: u16) -> Self {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Self {
            dialog: Rect::new(x, y, width.min(area.width), height.min(area.height)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_dialog_fits_small_screens() {
        let area = Rect::new(0, 0, 40, 10);
        let dialog = DialogLayout::centered(area, 60, 20).dialog;
        assert_eq!(dialog, Rect::new(0, 0, 40, 10));

        let dialog = DialogLayout::centered(Rect::new(0, 0, 100, 40), 60, 20).dialog;
        assert_eq!(dialog, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn list_layout_reserves_filter_and_footer() {
        let layout = ListLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.filter.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.table.height, 20);
    }
}
