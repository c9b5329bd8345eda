use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::errors::RepositoryError;

/// Generic error type used by service layer functions.
///
/// Callers branch on the variant: show a corrected form (`Validation`), a
/// missing-record response (`NotFound`), a reload-and-retry prompt
/// (`Conflict`), or fail the request (`Persistence`).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more field constraints violated; per-field messages attached.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    /// Requested record was not found.
    #[error("not found")]
    NotFound,
    /// A concurrent writer changed the record since it was loaded.
    #[error("concurrent update conflict")]
    Conflict,
    /// The storage layer failed; the underlying cause is preserved.
    #[error("persistence failure")]
    Persistence(#[source] RepositoryError),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
