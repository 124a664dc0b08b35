//! Sortable, selectable, paginated table pieces

use std::hash::Hash;

use ratatui::{
    layout::Constraint,
    text::{Line, Span},
    widgets::{Cell, Row},
};

use crate::table::{ListState, SelectAllState, SortDescriptor};
use crate::ui::theme::Theme;

/// One visible column of a records table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Field identifier passed to `request_sort`
    pub key: &'static str,
    pub title: &'static str,
    pub width: Constraint,
}

impl ColumnDef {
    pub const fn new(key: &'static str, title: &'static str, width: Constraint) -> Self {
        Self { key, title, width }
    }
}

/// Width constraints with a leading checkbox column
pub fn widths(columns: &[ColumnDef]) -> Vec<Constraint> {
    std::iter::once(Constraint::Length(3))
        .chain(columns.iter().map(|c| c.width))
        .collect()
}

/// Header with a select-all checkbox, the sort arrow and the focused column underlined
pub fn header_row(
    columns: &[ColumnDef],
    sort: &SortDescriptor,
    focused_column: usize,
    select_all: SelectAllState,
    theme: &Theme,
) -> Row<'static> {
    let mut cells = vec![Cell::from(select_all.checkbox()).style(theme.checked())];
    for (i, column) in columns.iter().enumerate() {
        let arrow = if column.key == sort.order_by {
            sort.order.arrow()
        } else {
            ""
        };
        let mut style = theme.header();
        if i == focused_column {
            style = style.add_modifier(ratatui::style::Modifier::UNDERLINED);
        }
        cells.push(Cell::from(format!("{}{}", column.title, arrow)).style(style));
    }
    Row::new(cells).height(1)
}

/// Checkbox cell for one row
pub fn checkbox_cell(checked: bool, theme: &Theme) -> Cell<'static> {
    if checked {
        Cell::from("[x]").style(theme.checked())
    } else {
        Cell::from("[ ]").style(theme.dim())
    }
}

/// "Rows per page: 10  11–20 of 42  page 2/5  3 selected"
pub fn pagination_line<K: Clone + Eq + Hash>(
    state: &ListState<K>,
    total: usize,
    theme: &Theme,
) -> Line<'static> {
    let bounds = state.page_bounds(total);
    let range = if bounds.is_empty() {
        format!("0 of {}", total)
    } else {
        format!("{}–{} of {}", bounds.start + 1, bounds.end, total)
    };

    let mut spans = vec![
        Span::styled(format!(" Rows per page: {}", state.rows_per_page()), theme.dim()),
        Span::raw("  "),
        Span::styled(range, theme.normal()),
        Span::raw("  "),
        Span::styled(
            format!("page {}/{}", state.page() + 1, state.page_count(total)),
            theme.dim(),
        ),
    ];
    if !state.selected().is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} selected", state.selected().len()),
            theme.checked(),
        ));
    }
    Line::from(spans)
}
