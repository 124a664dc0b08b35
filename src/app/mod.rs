//! Application state, background tasks and input events

pub mod events;
pub mod state;
