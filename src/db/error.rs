//! Store error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database connection lock poisoned")]
    Poisoned,

    #[error("record {0} not found")]
    NotFound(i64),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
