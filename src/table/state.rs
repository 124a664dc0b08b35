//! List-state controller: sort, selection and pagination for one view

use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::Range;

use super::selection::{SelectAllState, SelectionSet};
use super::sort::{build_comparator, stable_sort, SortDescriptor, SortOrder};
use super::value::Record;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Initial configuration for a [`ListState`]
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub default_order_by: String,
    pub default_order: SortOrder,
    pub default_rows_per_page: usize,
}

impl ListOptions {
    pub fn new(default_order_by: impl Into<String>) -> Self {
        Self {
            default_order_by: default_order_by.into(),
            default_order: SortOrder::Ascending,
            default_rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.default_order = order;
        self
    }

    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.default_rows_per_page = rows_per_page;
        self
    }
}

/// Current page cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub rows_per_page: usize,
}

/// Sort, selection and pagination state owned by a single list view.
///
/// Every handler mutates exactly one slice of state, except
/// [`ListState::change_rows_per_page`] which also rewinds to the first page.
#[derive(Debug, Clone)]
pub struct ListState<K> {
    sort: SortDescriptor,
    selection: SelectionSet<K>,
    pagination: Pagination,
}

impl<K: Clone + Eq + Hash> ListState<K> {
    pub fn new(options: ListOptions) -> Self {
        Self {
            sort: SortDescriptor {
                order_by: options.default_order_by,
                order: options.default_order,
            },
            selection: SelectionSet::new(),
            pagination: Pagination {
                page: 0,
                rows_per_page: sanitize_rows_per_page(options.default_rows_per_page),
            },
        }
    }

    pub fn sort(&self) -> &SortDescriptor {
        &self.sort
    }

    #[cfg(test)]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page(&self) -> usize {
        self.pagination.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.pagination.rows_per_page
    }

    /// Sort by `field`, flipping direction when it is already the sort field
    pub fn request_sort(&mut self, field: &str) {
        if self.sort.order_by == field {
            self.sort.order = self.sort.order.flipped();
        } else {
            self.sort.order_by = field.to_string();
            self.sort.order = SortOrder::Ascending;
        }
        tracing::debug!("Sort by {} {:?}", self.sort.order_by, self.sort.order);
    }

    /// Toggle a single row's selection
    pub fn select_row(&mut self, id: K) {
        self.selection.toggle(id);
    }

    /// Clear the selection when it is exactly `ids`, otherwise replace it
    /// with `ids`. Ids selected outside `ids` count as a partial selection.
    pub fn select_all(&mut self, ids: &[K]) {
        let all_selected = !self.selection.is_empty()
            && self.selection.len() == ids.len()
            && self.selection.state_for(ids) == SelectAllState::All;
        if all_selected {
            self.selection.clear();
        } else {
            self.selection.replace(ids);
        }
    }

    pub fn is_selected(&self, id: &K) -> bool {
        self.selection.contains(id)
    }

    /// Selected ids in selection order
    pub fn selected(&self) -> &[K] {
        self.selection.as_slice()
    }

    pub fn selection_state(&self, ids: &[K]) -> SelectAllState {
        self.selection.state_for(ids)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn change_page(&mut self, page: usize) {
        self.pagination.page = page;
    }

    /// Change the page size and return to the first page.
    /// A page size of zero is clamped to one.
    pub fn change_rows_per_page(&mut self, rows_per_page: usize) {
        self.pagination.rows_per_page = sanitize_rows_per_page(rows_per_page);
        self.pagination.page = 0;
    }

    pub fn reset_page(&mut self) {
        self.pagination.page = 0;
    }

    /// Offset of the first row on the current page
    pub fn page_offset(&self) -> usize {
        self.pagination.page.saturating_mul(self.pagination.rows_per_page)
    }

    /// Number of pages needed for `total` rows (at least one)
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.pagination.rows_per_page).max(1)
    }

    /// Row range shown on the current page, clipped to `total`
    pub fn page_bounds(&self, total: usize) -> Range<usize> {
        let start = self.page_offset().min(total);
        let end = start.saturating_add(self.pagination.rows_per_page).min(total);
        start..end
    }

    /// Comparator for the current sort descriptor
    pub fn comparator<'a, R>(&'a self) -> impl Fn(&R, &R) -> Ordering + 'a
    where
        R: Record<Id = K> + 'a,
    {
        build_comparator(self.sort.order, &self.sort.order_by)
    }

    /// Stable-sort `rows` by the current sort descriptor
    pub fn sort_rows<R>(&self, rows: &[R]) -> Vec<R>
    where
        R: Record<Id = K> + Clone,
    {
        stable_sort(rows, self.comparator())
    }
}

fn sanitize_rows_per_page(rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        tracing::warn!("Ignoring rows-per-page of 0, using 1");
        1
    } else {
        rows_per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::value::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: &'static str,
    }

    impl Record for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "id" => Some(FieldValue::Integer(self.id as i64)),
                "name" => Some(FieldValue::from(self.name)),
                _ => None,
            }
        }

        fn sortable_fields() -> &'static [&'static str] {
            &["id", "name"]
        }
    }

    fn list() -> ListState<u32> {
        ListState::new(ListOptions::new("name"))
    }

    #[test]
    fn defaults_are_applied() {
        let state = list();
        assert_eq!(state.sort().order_by, "name");
        assert_eq!(state.sort().order, SortOrder::Ascending);
        assert_eq!(state.pagination(), Pagination { page: 0, rows_per_page: 10 });
        assert!(state.selected().is_empty());

        let custom: ListState<u32> = ListState::new(
            ListOptions::new("id")
                .with_order(SortOrder::Descending)
                .with_rows_per_page(25),
        );
        assert_eq!(custom.sort().order, SortOrder::Descending);
        assert_eq!(custom.rows_per_page(), 25);
    }

    #[test]
    fn zero_rows_per_page_is_clamped() {
        let state: ListState<u32> = ListState::new(ListOptions::new("id").with_rows_per_page(0));
        assert_eq!(state.rows_per_page(), 1);

        let mut state = list();
        state.change_page(4);
        state.change_rows_per_page(0);
        assert_eq!(state.pagination(), Pagination { page: 0, rows_per_page: 1 });
    }

    #[test]
    fn request_sort_toggles_same_field() {
        let mut state = list();
        state.request_sort("name");
        assert_eq!(state.sort().order, SortOrder::Descending);
        state.request_sort("name");
        assert_eq!(state.sort().order, SortOrder::Ascending);
    }

    #[test]
    fn request_sort_on_new_field_resets_to_ascending() {
        let mut state = list();
        state.request_sort("name");
        state.request_sort("id");
        assert_eq!(
            state.sort(),
            &SortDescriptor { order_by: "id".to_string(), order: SortOrder::Ascending }
        );
    }

    #[test]
    fn select_row_is_its_own_inverse() {
        let mut state = list();
        state.select_row(7);
        let before = state.selected().to_vec();
        state.select_row(9);
        state.select_row(9);
        assert_eq!(state.selected(), before.as_slice());
        assert!(state.is_selected(&7));
        assert!(!state.is_selected(&9));
    }

    #[test]
    fn select_all_selects_then_clears() {
        let mut state = list();
        state.select_all(&[1, 2, 3]);
        assert_eq!(state.selected(), &[1, 2, 3]);
        state.select_all(&[1, 2, 3]);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn select_all_with_partial_selection_selects_everything() {
        let mut state = list();
        state.select_row(2);
        assert_eq!(state.selection_state(&[1, 2, 3]), SelectAllState::Partial);
        state.select_all(&[1, 2, 3]);
        assert_eq!(state.selected(), &[1, 2, 3]);
    }

    #[test]
    fn select_all_replaces_selection_that_reaches_beyond_ids() {
        let mut state = list();
        state.select_row(1);
        state.select_row(6);
        state.select_row(7);
        assert_eq!(state.selection_state(&[6, 7]), SelectAllState::All);

        state.select_all(&[6, 7]);
        assert_eq!(state.selected(), &[6, 7]);
        state.select_all(&[6, 7]);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn select_all_on_empty_page_leaves_nothing_selected() {
        let mut state = list();
        state.select_all(&[]);
        assert!(state.selected().is_empty());
        state.select_row(4);
        state.select_all(&[]);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn deselecting_after_select_all_keeps_order() {
        let mut state = list();
        state.select_all(&[1, 2, 3]);
        state.select_row(2);
        assert_eq!(state.selected(), &[1, 3]);
    }

    #[test]
    fn changing_rows_per_page_returns_to_first_page() {
        let mut state = list();
        state.change_page(3);
        assert_eq!(state.page(), 3);
        state.change_rows_per_page(25);
        assert_eq!(state.pagination(), Pagination { page: 0, rows_per_page: 25 });
    }

    #[test]
    fn page_arithmetic() {
        let mut state = list();
        assert_eq!(state.page_count(0), 1);
        assert_eq!(state.page_count(10), 1);
        assert_eq!(state.page_count(11), 2);

        state.change_page(1);
        assert_eq!(state.page_offset(), 10);
        assert_eq!(state.page_bounds(15), 10..15);

        // Not clamped; the view decides what to do with an empty page
        state.change_page(5);
        assert_eq!(state.page_bounds(15), 15..15);
    }

    #[test]
    fn sort_rows_follows_descriptor() {
        let rows = vec![
            Item { id: 1, name: "B" },
            Item { id: 2, name: "A" },
            Item { id: 3, name: "A" },
        ];
        let mut state = list();
        let ids: Vec<u32> = state.sort_rows(&rows).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        state.request_sort("name");
        let ids: Vec<u32> = state.sort_rows(&rows).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
