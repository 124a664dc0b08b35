//! Reusable widgets

pub mod form;
pub mod searchbar;
pub mod statusbar;
pub mod table;
