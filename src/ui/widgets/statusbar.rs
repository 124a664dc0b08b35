//! Status bar widget

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::app::state::{Notice, NoticeKind};
use crate::ui::theme::Theme;

/// Status bar item
pub struct StatusItem {
    pub label: String,
    pub value: String,
    pub style: Style,
}

impl StatusItem {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Item showing the last notice, colored by its kind
    pub fn notice(notice: &Notice, theme: &Theme) -> Self {
        let style = match notice.kind {
            NoticeKind::Info => theme.info(),
            NoticeKind::Success => theme.success(),
            NoticeKind::Error => theme.error(),
        };
        Self::new("", &notice.text).with_style(style)
    }
}

/// Build a status bar line from items
pub fn build_status_line(items: Vec<StatusItem>, separator: &str) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];

    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(format!(" {} ", separator)));
        }

        if !item.label.is_empty() {
            spans.push(Span::raw(format!("{}: ", item.label)));
        }
        spans.push(Span::styled(item.value, item.style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_joined_with_separator() {
        let line = build_status_line(
            vec![StatusItem::new("Employees", "12"), StatusItem::new("", "?=help")],
            "│",
        );
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Employees: 12 │ ?=help");
    }
}
