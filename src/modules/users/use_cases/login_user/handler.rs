use std::sync::Arc;

use crate::modules::users::core::ports::{PasswordHasher, UserRepository};
use crate::modules::users::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::auth::tokens::JwtCodec;

pub struct LoginUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: JwtCodec,
}

impl LoginUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: JwtCodec,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn handle(&self, email: &str, password: String) -> Result<String, ApplicationError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(ApplicationError::InvalidCredentials);
        };
        let Some(hash) = user.password_hash.clone() else {
            return Err(ApplicationError::InvalidCredentials);
        };

        let hasher = self.hasher.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|err| anyhow::anyhow!("password check task failed: {err}"))?;
        if !matches {
            tracing::debug!(user_id = %user.id, "password mismatch");
            return Err(ApplicationError::InvalidCredentials);
        }

        Ok(self.tokens.issue(&user.id)?)
    }
}
