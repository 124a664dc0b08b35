//! Tagged result returned by every data-access call

use std::fmt;

/// Result of a data-access call.
///
/// For fetches `total_records` is the number of records matching the
/// query across all pages. For mutations it is the number of records left
/// in the table afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Success { data: T, total_records: usize },
    Failure { reason: String },
}

impl<T> FetchOutcome<T> {
    pub fn success(data: T, total_records: usize) -> Self {
        Self::Success { data, total_records }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure { reason: reason.into() }
    }

    /// Convert a fallible `(data, total)` result, logging the failure
    pub fn from_result<E: fmt::Display>(result: Result<(T, usize), E>, context: &str) -> Self {
        match result {
            Ok((data, total_records)) => Self::success(data, total_records),
            Err(e) => {
                tracing::error!("{} failed: {}", context, e);
                Self::failure(format!("{}: {}", context, e))
            }
        }
    }
}
