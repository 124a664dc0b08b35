//! Generic records tab: paged table, filter, editor and bulk delete

use std::fmt;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tokio::sync::mpsc;

use crate::app::events::{apply_delta, navigation_delta};
use crate::app::state::{spawn_delete, spawn_fetch, spawn_save, AppState, ListMessage, Notice};
use crate::config::KeyBindings;
use crate::data::{DataSource, FetchOutcome, PageQuery, RequestTracker};
use crate::forms::FormModel;
use crate::table::{ListOptions, ListState, Record, SortOrder};
use crate::ui::dialogs::confirm::{ConfirmDialog, Confirmation};
use crate::ui::dialogs::form::{FormDialog, FormResult};
use crate::ui::layout::ListLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::searchbar::{SearchBar, SearchEvent};
use crate::ui::widgets::table::{checkbox_cell, header_row, pagination_line, widths, ColumnDef};

/// A record type that can be listed and edited in its own tab
pub trait TabRecord: Record<Id = i64> + Clone + Send + fmt::Debug + 'static {
    /// Singular name used in dialog titles and notices
    const NOUN: &'static str;
    const DEFAULT_ORDER_BY: &'static str;
    const DEFAULT_ORDER: SortOrder = SortOrder::Ascending;

    type Form: FormModel;

    fn columns() -> &'static [ColumnDef];

    /// Cells in the same order as `columns()`
    fn cells(&self, theme: &Theme) -> Vec<Cell<'static>>;

    /// Short human label, e.g. the employee code
    fn label(&self) -> String;

    fn blank_form() -> Self::Form;

    fn to_form(&self) -> Self::Form;

    /// Build a record from submitted values, keeping identity from `base`
    fn from_form(form: &Self::Form, base: Option<&Self>) -> Option<Self>;
}

struct Editor<R: TabRecord> {
    dialog: FormDialog<R::Form>,
    base: Option<R>,
    saving: bool,
}

pub struct RecordsTab<R: TabRecord> {
    source: Arc<dyn DataSource<R>>,
    keys: KeyBindings,
    list: ListState<i64>,
    rows_per_page_options: Vec<usize>,

    // Current page as fetched, and in display order
    rows: Vec<R>,
    visible: Vec<R>,
    total: usize,
    loading: bool,
    load_error: Option<String>,

    table_state: TableState,
    focused_column: usize,
    search_bar: SearchBar,
    tracker: RequestTracker,

    editor: Option<Editor<R>>,
    confirm: Option<ConfirmDialog<Vec<i64>>>,
    notice: Option<Notice>,

    tx: mpsc::Sender<ListMessage<R>>,
    rx: mpsc::Receiver<ListMessage<R>>,
}

impl<R: TabRecord> RecordsTab<R> {
    pub fn new(state: &AppState) -> Self
    where
        crate::db::Database: DataSource<R>,
    {
        Self::with_source(
            state.source(),
            state.keys.clone(),
            state.settings.rows_per_page,
            state.settings.rows_per_page_options.clone(),
        )
    }

    pub fn with_source(
        source: Arc<dyn DataSource<R>>,
        keys: KeyBindings,
        rows_per_page: usize,
        rows_per_page_options: Vec<usize>,
    ) -> Self {
        let (tx, rx) = mpsc::channel(32);
        let options = ListOptions::new(R::DEFAULT_ORDER_BY)
            .with_order(R::DEFAULT_ORDER)
            .with_rows_per_page(rows_per_page);
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            source,
            keys,
            list: ListState::new(options),
            rows_per_page_options,
            rows: Vec::new(),
            visible: Vec::new(),
            total: 0,
            loading: false,
            load_error: None,
            table_state,
            focused_column: 0,
            search_bar: SearchBar::new(),
            tracker: RequestTracker::new(),
            editor: None,
            confirm: None,
            notice: None,
            tx,
            rx,
        }
    }

    /// Total records matching the current filter
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn showing_dialog(&self) -> bool {
        self.editor.is_some() || self.confirm.is_some() || self.search_bar.active
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Fetch the current page; any response to an earlier request is dropped
    pub fn request_page(&mut self) {
        let generation = self.tracker.begin();
        self.loading = true;
        let query = PageQuery::new(self.list.page(), self.list.rows_per_page(), self.search_bar.query());
        spawn_fetch(self.source.clone(), query, generation, self.tx.clone());
    }

    /// Apply every finished background call
    pub fn poll(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.handle_message(message);
        }
    }

    fn handle_message(&mut self, message: ListMessage<R>) {
        match message {
            ListMessage::Loaded { generation, outcome } => {
                if !self.tracker.is_current(generation) {
                    tracing::debug!("Dropping stale page (generation {})", generation);
                    return;
                }
                self.loading = false;
                match outcome {
                    FetchOutcome::Success { data, total_records } => {
                        self.load_error = None;
                        self.total = total_records;
                        self.rows = data;
                        if self.rows.is_empty() && self.list.page() > 0 && total_records > 0 {
                            // Page went past the end, e.g. after deletes elsewhere
                            self.go_to_page(self.list.page_count(total_records) - 1);
                        }
                        self.refresh_view();
                    }
                    FetchOutcome::Failure { reason } => {
                        self.notice = Some(Notice::error(reason.clone()));
                        self.load_error = Some(reason);
                    }
                }
            }
            ListMessage::Saved { outcome } => match outcome {
                FetchOutcome::Success { data, .. } => {
                    self.editor = None;
                    self.notice = Some(Notice::success(format!("Saved {} {}", R::NOUN, data.label())));
                    self.request_page();
                }
                FetchOutcome::Failure { reason } => {
                    if let Some(editor) = &mut self.editor {
                        editor.saving = false;
                    }
                    self.notice = Some(Notice::error(reason));
                }
            },
            ListMessage::Deleted { outcome } => match outcome {
                FetchOutcome::Success { data: deleted, .. } => {
                    self.list.clear_selection();
                    // Clamp against the filtered total, not the whole table
                    let remaining = self.total.saturating_sub(deleted);
                    if self.list.page() > 0 && self.list.page_offset() >= remaining {
                        self.list.change_page(self.list.page_count(remaining) - 1);
                    }
                    self.notice = Some(Notice::success(format!(
                        "Deleted {} {}(s)",
                        deleted,
                        R::NOUN.to_lowercase()
                    )));
                    self.request_page();
                }
                FetchOutcome::Failure { reason } => {
                    self.notice = Some(Notice::error(reason));
                }
            },
        }
    }

    /// Re-sort the fetched page and keep the cursor in range
    fn refresh_view(&mut self) {
        self.visible = self.list.sort_rows(&self.rows);
        let cursor = self.table_state.selected().unwrap_or(0);
        let max = self.visible.len().saturating_sub(1);
        self.table_state.select(Some(cursor.min(max)));
    }

    fn current_row(&self) -> Option<&R> {
        self.visible.get(self.table_state.selected()?)
    }

    fn page_ids(&self) -> Vec<i64> {
        self.visible.iter().map(Record::id).collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(editor) = &mut self.editor {
            if editor.saving {
                return;
            }
            match editor.dialog.handle_key(key) {
                Some(FormResult::Save(values)) => match R::from_form(&values, editor.base.as_ref()) {
                    Some(record) => {
                        editor.saving = true;
                        spawn_save(self.source.clone(), record, self.tx.clone());
                    }
                    None => {
                        self.notice = Some(Notice::error(format!("Invalid {} values", R::NOUN.to_lowercase())));
                    }
                },
                Some(FormResult::Cancel) => self.editor = None,
                None => {}
            }
            return;
        }

        if let Some(confirm) = &mut self.confirm {
            match confirm.handle_key(key) {
                Some(Confirmation::Confirmed(ids)) => {
                    self.confirm = None;
                    spawn_delete(self.source.clone(), ids, self.tx.clone());
                }
                Some(Confirmation::Cancelled) => self.confirm = None,
                None => {}
            }
            return;
        }

        if self.search_bar.active {
            match self.search_bar.handle_key(key) {
                SearchEvent::Changed | SearchEvent::Cleared => self.filter_changed(),
                SearchEvent::Closed | SearchEvent::Ignored => {}
            }
            return;
        }

        let delta = if self.keys.up.matches_event(&key) {
            Some(-1)
        } else if self.keys.down.matches_event(&key) {
            Some(1)
        } else {
            navigation_delta(&key)
        };
        if let Some(delta) = delta {
            let cursor = self.table_state.selected().unwrap_or(0);
            self.table_state.select(Some(apply_delta(cursor, delta, self.visible.len())));
            return;
        }

        let keys = &self.keys;
        if keys.next_column.matches_event(&key) {
            self.focused_column = (self.focused_column + 1).min(R::columns().len().saturating_sub(1));
        } else if keys.prev_column.matches_event(&key) {
            self.focused_column = self.focused_column.saturating_sub(1);
        } else if keys.sort.matches_event(&key) {
            if let Some(column) = R::columns().get(self.focused_column) {
                if R::sortable_fields().contains(&column.key) {
                    self.list.request_sort(column.key);
                    self.refresh_view();
                } else {
                    self.notice = Some(Notice::info(format!("{} cannot be sorted", column.title)));
                }
            }
        } else if keys.select.matches_event(&key) {
            if let Some(id) = self.current_row().map(Record::id) {
                self.list.select_row(id);
            }
        } else if keys.select_all.matches_event(&key) {
            let ids = self.page_ids();
            self.list.select_all(&ids);
        } else if keys.next_page.matches_event(&key) {
            if self.list.page() + 1 < self.list.page_count(self.total) {
                self.go_to_page(self.list.page() + 1);
            }
        } else if keys.prev_page.matches_event(&key) {
            if self.list.page() > 0 {
                self.go_to_page(self.list.page() - 1);
            }
        } else if keys.more_rows.matches_event(&key) {
            self.cycle_rows_per_page(true);
        } else if keys.fewer_rows.matches_event(&key) {
            self.cycle_rows_per_page(false);
        } else if keys.filter.matches_event(&key) {
            self.search_bar.activate();
        } else if keys.clear_filter.matches_event(&key) {
            if !self.search_bar.query().is_empty() {
                self.search_bar.clear();
                self.filter_changed();
            }
        } else if keys.refresh.matches_event(&key) {
            self.list.clear_selection();
            self.request_page();
        } else if keys.new_item.matches_event(&key) {
            self.editor = Some(Editor {
                dialog: FormDialog::create(R::NOUN, R::blank_form()),
                base: None,
                saving: false,
            });
        } else if keys.edit.matches_event(&key) || key.code == KeyCode::Enter {
            if let Some(row) = self.current_row().cloned() {
                self.editor = Some(Editor {
                    dialog: FormDialog::edit(R::NOUN, row.to_form()),
                    base: Some(row),
                    saving: false,
                });
            }
        } else if keys.delete.matches_event(&key) || key.code == KeyCode::Delete {
            self.confirm_delete();
        }
    }

    /// Selection only ever covers the visible page
    fn go_to_page(&mut self, page: usize) {
        self.list.change_page(page);
        self.list.clear_selection();
        self.request_page();
    }

    fn filter_changed(&mut self) {
        self.list.reset_page();
        self.list.clear_selection();
        self.request_page();
    }

    fn cycle_rows_per_page(&mut self, larger: bool) {
        let options = &self.rows_per_page_options;
        if options.is_empty() {
            return;
        }
        let current = self.list.rows_per_page();
        let next = if larger {
            options.iter().copied().find(|&n| n > current)
        } else {
            options.iter().rev().copied().find(|&n| n < current)
        };
        if let Some(n) = next {
            self.list.change_rows_per_page(n);
            self.list.clear_selection();
            self.request_page();
        }
    }

    fn confirm_delete(&mut self) {
        let ids: Vec<i64> = if self.list.selected().is_empty() {
            self.current_row().map(Record::id).into_iter().collect()
        } else {
            self.list.selected().to_vec()
        };
        if ids.is_empty() {
            self.notice = Some(Notice::info(format!("No {} to delete", R::NOUN.to_lowercase())));
            return;
        }

        let message = match (ids.len(), self.current_row()) {
            (1, Some(row)) if row.id() == ids[0] => format!("Delete {} {}?", R::NOUN.to_lowercase(), row.label()),
            (n, _) => format!("Delete {} selected {}(s)? This cannot be undone.", n, R::NOUN.to_lowercase()),
        };
        self.confirm = Some(ConfirmDialog::new("Confirm Delete", &message, ids).with_labels("Delete", "Cancel"));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let layout = ListLayout::new(area);

        self.search_bar.render(frame, layout.filter, theme.normal(), theme.border_focused());

        if let (Some(reason), true) = (&self.load_error, self.visible.is_empty()) {
            let message = Paragraph::new(format!("Could not load records: {}  (r to retry)", reason))
                .style(theme.error());
            frame.render_widget(message, layout.table);
        } else {
            let ids = self.page_ids();
            let header = header_row(
                R::columns(),
                self.list.sort(),
                self.focused_column,
                self.list.selection_state(&ids),
                theme,
            );

            let rows: Vec<Row> = self
                .visible
                .iter()
                .map(|record| {
                    let checked = self.list.is_selected(&record.id());
                    let mut cells = vec![checkbox_cell(checked, theme)];
                    cells.extend(record.cells(theme));
                    Row::new(cells)
                })
                .collect();

            let table = Table::new(rows, widths(R::columns()))
                .header(header)
                .row_highlight_style(theme.selected())
                .highlight_symbol("▶ ");

            frame.render_stateful_widget(table, layout.table, &mut self.table_state);
        }

        let mut footer = pagination_line(&self.list, self.total, theme);
        if self.loading {
            footer.spans.push(Span::styled("  loading…", theme.dim()));
        }
        frame.render_widget(Paragraph::new(footer), layout.footer);
    }

    /// Dialogs are drawn last so they sit above the status bar
    pub fn render_overlays(&self, frame: &mut Frame, theme: &Theme) {
        if let Some(editor) = &self.editor {
            editor.dialog.render(frame, theme);
            if editor.saving {
                let area = frame.area();
                let line = Line::from(Span::styled(" Saving… ", theme.highlight()));
                frame.render_widget(Paragraph::new(line), Rect::new(area.x, area.y, area.width.min(10), 1));
            }
        }
        if let Some(confirm) = &self.confirm {
            confirm.render(frame, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::db::Database;
    use crate::models::{Booking, Employee};
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn code(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn seeded_tab<R: TabRecord>(settings: Settings) -> RecordsTab<R>
    where
        Database: DataSource<R>,
    {
        let db = Database::open(":memory:").unwrap();
        db.seed_demo_data().unwrap();
        let state = AppState::new(db, settings);
        RecordsTab::new(&state)
    }

    fn tab() -> RecordsTab<Employee> {
        seeded_tab(Settings { rows_per_page: 5, ..Settings::default() })
    }

    fn type_text<R: TabRecord>(tab: &mut RecordsTab<R>, text: &str) {
        for c in text.chars() {
            tab.handle_key(key(c));
        }
    }

    async fn settle<R: TabRecord>(tab: &mut RecordsTab<R>) {
        let message = tab.rx.recv().await.unwrap();
        tab.handle_message(message);
    }

    /// Handle messages until a save or delete result arrives
    async fn settle_mutation<R: TabRecord>(tab: &mut RecordsTab<R>) {
        loop {
            let message = tab.rx.recv().await.unwrap();
            let done = !matches!(message, ListMessage::Loaded { .. });
            tab.handle_message(message);
            if done {
                return;
            }
        }
    }

    /// Drain until the latest requested page has arrived
    async fn settle_page<R: TabRecord>(tab: &mut RecordsTab<R>) {
        while tab.loading {
            settle(tab).await;
        }
    }

    #[tokio::test]
    async fn loads_first_page() {
        let mut tab = tab();
        tab.request_page();
        settle_page(&mut tab).await;

        assert_eq!(tab.visible.len(), 5);
        assert_eq!(tab.total, 12);
        assert_eq!(tab.current_row().map(|e| e.id), Some(1));
    }

    #[tokio::test]
    async fn stale_pages_are_ignored() {
        let mut tab = tab();
        tab.request_page();
        let stale = tab.tracker.latest();
        tab.request_page();

        tab.handle_message(ListMessage::Loaded {
            generation: stale,
            outcome: FetchOutcome::success(Vec::new(), 0),
        });
        assert!(tab.loading);
        assert_eq!(tab.total, 0);

        settle_page(&mut tab).await;
        assert_eq!(tab.total, 12);
    }

    #[tokio::test]
    async fn sort_key_orders_visible_rows() {
        let mut tab = tab();
        tab.request_page();
        settle_page(&mut tab).await;

        // focus "full_name" and sort twice for descending
        tab.handle_key(key(']'));
        tab.handle_key(key('s'));
        let names: Vec<_> = tab.visible.iter().map(|e| e.full_name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        tab.handle_key(key('s'));
        let first = tab.visible[0].full_name.clone();
        assert!(tab.visible.iter().all(|e| e.full_name <= first));
    }

    #[tokio::test]
    async fn filter_resets_page_and_selection() {
        let mut tab = tab();
        tab.request_page();
        settle_page(&mut tab).await;

        tab.handle_key(code(KeyCode::PageDown));
        settle_page(&mut tab).await;
        assert_eq!(tab.list.page(), 1);
        tab.handle_key(key(' '));
        assert_eq!(tab.list.selected().len(), 1);

        tab.handle_key(key('/'));
        for c in "workshop".chars() {
            tab.handle_key(key(c));
        }
        settle_page(&mut tab).await;

        assert_eq!(tab.list.page(), 0);
        assert!(tab.list.selected().is_empty());
        assert_eq!(tab.total, 5);
        assert!(tab.visible.iter().all(|e| e.department == "Workshop"));
    }

    #[tokio::test]
    async fn rows_per_page_cycles_through_options() {
        let mut tab = tab();
        tab.request_page();
        settle_page(&mut tab).await;
        tab.handle_key(code(KeyCode::PageDown));
        settle_page(&mut tab).await;

        tab.handle_key(key('+'));
        settle_page(&mut tab).await;
        assert_eq!(tab.list.rows_per_page(), 10);
        assert_eq!(tab.list.page(), 0);
        assert_eq!(tab.visible.len(), 10);

        tab.handle_key(key('-'));
        tab.handle_key(key('-'));
        settle_page(&mut tab).await;
        assert_eq!(tab.list.rows_per_page(), 5);
    }

    #[tokio::test]
    async fn bulk_delete_clears_selection_and_clamps_page() {
        let mut tab = tab();
        tab.request_page();
        settle_page(&mut tab).await;

        // last page holds employees 11 and 12
        tab.handle_key(code(KeyCode::PageDown));
        tab.handle_key(code(KeyCode::PageDown));
        settle_page(&mut tab).await;
        assert_eq!(tab.list.page(), 2);
        assert_eq!(tab.visible.len(), 2);

        tab.handle_key(key('a'));
        assert_eq!(tab.list.selected(), &[11, 12]);
        tab.handle_key(key('d'));
        assert!(tab.confirm.is_some());
        tab.handle_key(key('y'));

        settle_mutation(&mut tab).await;
        assert!(tab.list.selected().is_empty());
        assert_eq!(tab.list.page(), 1);
        settle_page(&mut tab).await;
        assert_eq!(tab.total, 10);
        assert_eq!(tab.visible.len(), 5);
    }

    #[tokio::test]
    async fn cancelled_delete_keeps_rows() {
        let mut tab = tab();
        tab.request_page();
        settle_page(&mut tab).await;

        tab.handle_key(key('d'));
        tab.handle_key(code(KeyCode::Esc));
        assert!(tab.confirm.is_none());
        assert!(tab.rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn edit_saves_and_reloads() {
        let mut tab = tab();
        tab.request_page();
        settle_page(&mut tab).await;

        tab.handle_key(key('e'));
        assert!(tab.showing_dialog());
        for _ in 0.."Nimal Perera".len() {
            tab.handle_key(code(KeyCode::Backspace));
        }
        for c in "Nimal P".chars() {
            tab.handle_key(key(c));
        }
        tab.handle_key(code(KeyCode::Enter));

        settle_mutation(&mut tab).await;
        assert!(tab.editor.is_none());
        assert_eq!(tab.take_notice().map(|n| n.text), Some("Saved Employee EMP-0001".to_string()));

        settle_page(&mut tab).await;
        assert_eq!(tab.visible[0].full_name, "Nimal P");
    }

    #[tokio::test]
    async fn changing_page_clears_selection() {
        let mut tab = tab();
        tab.request_page();
        settle_page(&mut tab).await;

        tab.handle_key(key(' '));
        assert_eq!(tab.list.selected(), &[1]);
        tab.handle_key(code(KeyCode::PageDown));
        assert!(tab.list.selected().is_empty());
        settle_page(&mut tab).await;

        // select-all on the new page covers exactly its rows
        tab.handle_key(key('a'));
        assert_eq!(tab.list.selected(), &[6, 7, 8, 9, 10]);
        tab.handle_key(key('a'));
        assert!(tab.list.selected().is_empty());

        tab.handle_key(key(' '));
        tab.handle_key(key('+'));
        assert!(tab.list.selected().is_empty());
    }

    #[tokio::test]
    async fn delete_in_filtered_view_clamps_to_filtered_total() {
        let mut tab: RecordsTab<Employee> = seeded_tab(Settings {
            rows_per_page: 2,
            rows_per_page_options: vec![2],
            ..Settings::default()
        });
        tab.request_page();
        settle_page(&mut tab).await;

        tab.handle_key(key('/'));
        type_text(&mut tab, "workshop");
        tab.handle_key(code(KeyCode::Enter));
        settle_page(&mut tab).await;
        assert_eq!(tab.total, 5);

        tab.handle_key(code(KeyCode::PageDown));
        tab.handle_key(code(KeyCode::PageDown));
        settle_page(&mut tab).await;
        assert_eq!(tab.list.page(), 2);
        assert_eq!(tab.page_ids(), vec![11]);

        tab.handle_key(key('d'));
        tab.handle_key(key('y'));
        settle_mutation(&mut tab).await;
        assert_eq!(tab.list.page(), 1);

        settle_page(&mut tab).await;
        assert_eq!(tab.total, 4);
        assert_eq!(tab.page_ids(), vec![5, 9]);
    }

    #[tokio::test]
    async fn custom_cursor_keys_move_the_cursor() {
        let mut settings = Settings { rows_per_page: 5, ..Settings::default() };
        settings.keys.insert("down".to_string(), "ctrl+n".to_string());
        let mut tab: RecordsTab<Employee> = seeded_tab(settings);
        tab.request_page();
        settle_page(&mut tab).await;

        tab.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(tab.current_row().map(|e| e.id), Some(2));
        assert!(tab.editor.is_none());
    }

    #[tokio::test]
    async fn empty_delete_only_notifies() {
        let mut tab: RecordsTab<Employee> = seeded_tab(Settings::default());
        tab.handle_key(key('d'));
        assert!(tab.confirm.is_none());
        assert_eq!(tab.take_notice().map(|n| n.kind), Some(crate::app::state::NoticeKind::Info));
    }

    #[tokio::test]
    async fn bookings_load_filter_and_save() {
        let mut tab: RecordsTab<Booking> = seeded_tab(Settings { rows_per_page: 5, ..Settings::default() });
        tab.request_page();
        settle_page(&mut tab).await;
        assert_eq!(tab.total, 8);
        assert_eq!(tab.visible.len(), 5);
        assert!(tab.visible.windows(2).all(|w| w[0].scheduled_for >= w[1].scheduled_for));

        tab.handle_key(key('/'));
        type_text(&mut tab, "full service");
        tab.handle_key(code(KeyCode::Enter));
        settle_page(&mut tab).await;
        assert_eq!(tab.total, 2);
        assert!(tab.visible.iter().all(|b| b.service == "Full service"));

        tab.handle_key(key('n'));
        type_text(&mut tab, "Nuwan Liyanage");
        tab.handle_key(code(KeyCode::Tab));
        type_text(&mut tab, "0719876599");
        tab.handle_key(code(KeyCode::Tab));
        type_text(&mut tab, "Full service");
        tab.handle_key(code(KeyCode::Enter));

        settle_mutation(&mut tab).await;
        assert!(tab.editor.is_none());
        let notice = tab.take_notice().map(|n| n.text).unwrap_or_default();
        assert!(notice.starts_with("Saved Booking BK-"), "{}", notice);

        settle_page(&mut tab).await;
        assert_eq!(tab.total, 3);
        assert!(tab.visible.iter().any(|b| b.customer_name == "Nuwan Liyanage"));
    }
}
