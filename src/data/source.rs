//! Data-access trait implemented by the store

use super::outcome::FetchOutcome;
use crate::table::Record;

/// Page request sent to a data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub rows_per_page: usize,
    /// Case-insensitive substring filter; empty matches everything
    pub search: String,
}

impl PageQuery {
    pub fn new(page: usize, rows_per_page: usize, search: &str) -> Self {
        Self {
            page,
            rows_per_page: rows_per_page.max(1),
            search: search.trim().to_string(),
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.rows_per_page)
    }

    /// SQL LIKE pattern for the search term
    pub fn like_pattern(&self) -> String {
        let escaped = self
            .search
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        format!("%{}%", escaped)
    }
}

/// CRUD access for one record type
pub trait DataSource<R: Record>: Send + Sync {
    /// One page of records plus the total matching `query.search`
    fn fetch_page(&self, query: &PageQuery) -> FetchOutcome<Vec<R>>;

    /// Insert a new record (id 0) or update an existing one
    fn save(&self, record: &R) -> FetchOutcome<R>;

    /// Delete the given ids, returning how many rows were removed
    fn delete_many(&self, ids: &[R::Id]) -> FetchOutcome<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let q = PageQuery::new(2, 0, "");
        assert_eq!(q.rows_per_page, 1);
        assert_eq!(q.offset(), 2);
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        let q = PageQuery::new(0, 10, " 50%_off ");
        assert_eq!(q.search, "50%_off");
        assert_eq!(q.like_pattern(), "%50\\%\\_off%");
    }
}
