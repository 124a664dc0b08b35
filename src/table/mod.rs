//! Generic list/table state: stable sorting, row selection and pagination

pub mod selection;
pub mod sort;
pub mod state;
pub mod value;

pub use selection::SelectAllState;
pub use sort::{SortDescriptor, SortOrder};
pub use state::{ListOptions, ListState, DEFAULT_ROWS_PER_PAGE};
pub use value::{FieldValue, Record};
