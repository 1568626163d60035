use thiserror::Error;

use crate::modules::users::core::ports::UserRepositoryError;
use crate::shared::infrastructure::auth::tokens::TokenError;
use crate::shared::infrastructure::http::errors::ApiError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("User already exists")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Repository(#[from] UserRepositoryError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("unexpected: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::EmailTaken | ApplicationError::InvalidCredentials => {
                ApiError::Rejected(err.to_string())
            }
            ApplicationError::UserNotFound => ApiError::NotFound(err.to_string()),
            ApplicationError::Repository(UserRepositoryError::NotFound(_)) => {
                ApiError::NotFound(ApplicationError::UserNotFound.to_string())
            }
            other => ApiError::Internal(anyhow::Error::new(other)),
        }
    }
}
