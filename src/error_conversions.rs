//! Error conversion glue between the repository and service layers.

use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(errors) => ServiceError::Validation(errors),
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConcurrencyConflict => ServiceError::Conflict,
            other => ServiceError::Persistence(other),
        }
    }
}
