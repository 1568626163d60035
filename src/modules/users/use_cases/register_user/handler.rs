use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::users::core::ports::{PasswordHasher, UserRepository, UserRepositoryError};
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::errors::ApplicationError;
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::infrastructure::auth::tokens::JwtCodec;

pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: JwtCodec,
}

impl RegisterUserHandler {
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

    /// Stores the new account and returns a signed token for it.
    pub async fn handle(&self, command: RegisterUser) -> Result<String, ApplicationError> {
        if self.users.find_by_email(&command.email).await?.is_some() {
            return Err(ApplicationError::EmailTaken);
        }

        let hasher = self.hasher.clone();
        let password = command.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|err| anyhow::anyhow!("password hashing task failed: {err}"))??;

        let user = User::new(
            Uuid::now_v7().to_string(),
            command.name,
            command.email,
            password_hash,
            Utc::now(),
        );
        let user_id = user.id.clone();

        match self.users.insert(user).await {
            Ok(()) => {}
            Err(UserRepositoryError::DuplicateEmail(_)) => return Err(ApplicationError::EmailTaken),
            Err(err) => return Err(err.into()),
        }

        tracing::info!(user_id = %user_id, "user registered");
        Ok(self.tokens.issue(&user_id)?)
    }
}
