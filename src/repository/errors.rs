use thiserror::Error;
use validator::ValidationErrors;

/// Failures surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// One or more field constraints violated; nothing was written.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The referenced id does not exist at operation time.
    #[error("record not found")]
    NotFound,
    /// The record changed (or was replaced) since the caller loaded it.
    /// Recoverable by reloading and retrying; the repository never retries.
    #[error("update conflicts with a concurrent write")]
    ConcurrencyConflict,
    /// Could not check a connection out of the pool.
    #[error("database connection failure: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The storage layer failed for reasons unrelated to input validity.
    #[error("persistence failure: {0}")]
    Persistence(#[source] diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            other => RepositoryError::Persistence(other),
        }
    }
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
