pub mod format;

pub use format::{format_money, format_money_plain, truncate};
