//! Error type for store operations.

use thiserror::Error;

/// Failures surfaced by store operations. Callers get an explicit result for
/// every query so the menu layer decides what the user sees.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Game not found: id {id}")]
    NotFound { id: i64 },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
