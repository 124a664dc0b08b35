//! Field values exposed by table records

use std::fmt;
use std::hash::Hash;

use chrono::NaiveDate;

/// A single comparable field value.
///
/// Values of the same kind compare naturally. Values of different kinds
/// compare by the order of the variants below, so a column that mixes
/// kinds still yields a total order instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    /// Amount in minor units (cents)
    Money(i64),
    Date(NaiveDate),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", if *v { "yes" } else { "no" }),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Money(v) => write!(f, "{}", crate::utils::format_money(*v)),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

/// A row that can be displayed, sorted and selected in a list view.
pub trait Record {
    /// Stable row identifier used by the selection set
    type Id: Clone + Eq + Hash + fmt::Debug;

    fn id(&self) -> Self::Id;

    /// Look up a field by identifier. `None` means the value is absent,
    /// either because the field is empty or because no such field exists.
    fn field(&self, key: &str) -> Option<FieldValue>;

    /// Field identifiers that views may offer for sorting
    fn sortable_fields() -> &'static [&'static str];
}
