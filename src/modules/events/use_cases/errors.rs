use thiserror::Error;

use crate::modules::events::core::decide::DecideError;
use crate::modules::events::core::ports::EventRepositoryError;
use crate::shared::infrastructure::http::errors::ApiError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Event not found")]
    NotFound,

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Repository(#[from] EventRepositoryError),

    #[error("gave up on event {0} after repeated concurrent writes")]
    Contention(String),
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound
            | ApplicationError::Repository(EventRepositoryError::NotFound(_)) => {
                ApiError::NotFound(ApplicationError::NotFound.to_string())
            }
            ApplicationError::Domain(
                reason @ (DecideError::NotHostForUpdate | DecideError::NotHostForDelete),
            ) => ApiError::Unauthorized(reason.to_string()),
            ApplicationError::Domain(reason) => ApiError::BadRequest(reason.to_string()),
            other => ApiError::Internal(anyhow::Error::new(other)),
        }
    }
}
