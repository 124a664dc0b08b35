//! SQLite-backed store for employees and bookings

mod error;
mod queries;
mod schema;
mod seed;
mod sqlite;

pub use error::StoreError;
pub use sqlite::Database;
