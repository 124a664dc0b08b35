//! Stable sorting over records

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::value::Record;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to a sorted column header
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Current sort field and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor {
    pub order_by: String,
    pub order: SortOrder,
}

/// Sort a collection into a new vector, keeping equal elements in their
/// original relative order.
pub fn stable_sort<T, F>(collection: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = collection.to_vec();
    // slice::sort_by is a stable merge sort
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}

/// Compare two records so that the larger `order_by` value comes first.
/// Absent values count as smaller than any present value.
pub fn descending_compare<R: Record>(a: &R, b: &R, order_by: &str) -> Ordering {
    b.field(order_by).cmp(&a.field(order_by))
}

/// Build the ordering function for a sort direction and field.
pub fn build_comparator<'a, R: Record + 'a>(
    order: SortOrder,
    order_by: &'a str,
) -> impl Fn(&R, &R) -> Ordering + 'a {
    move |a, b| match order {
        SortOrder::Descending => descending_compare(a, b, order_by),
        SortOrder::Ascending => descending_compare(a, b, order_by).reverse(),
    }
}
