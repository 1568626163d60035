use async_trait::async_trait;
use thiserror::Error;

use crate::modules::users::core::user::User;

#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("a user with email {0} already exists")]
    DuplicateEmail(String),

    #[error("user {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// A mutation applied to a stored user.
pub type UserChange = Box<dyn FnOnce(&mut User) + Send>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> Result<(), UserRepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserRepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;
    /// Applies `change` atomically and returns the stored result.
    async fn update(&self, id: &str, change: UserChange) -> Result<User, UserRepositoryError>;
}

/// Hashing is CPU bound; implementations are called from a blocking thread.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> anyhow::Result<String>;
    fn verify(&self, password: &str, hash: &str) -> bool;
}
