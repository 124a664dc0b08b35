//! Modal dialogs

pub mod confirm;
pub mod form;
