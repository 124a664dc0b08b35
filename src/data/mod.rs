//! Data access: tagged results, page queries and request tracking

pub mod outcome;
pub mod request;
pub mod source;

pub use outcome::FetchOutcome;
pub use request::RequestTracker;
pub use source::{DataSource, PageQuery};
