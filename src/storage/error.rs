use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Query exceeded its deadline of {0:?}")]
    DeadlineExceeded(Duration),
}

impl StorageError {
    /// Returns `true` if the database rejected a write because of a unique or primary key constraint.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StorageError::Query(sqlx::Error::Database(err)) => err.is_unique_violation(),
            _ => false,
        }
    }
}
