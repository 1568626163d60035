use chrono::Utc;
use std::sync::Arc;

use crate::modules::users::core::ports::{UserRepository, UserRepositoryError};
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::errors::ApplicationError;

/// Verification is granted on request; there is no review step yet.
pub struct RequestVerificationHandler {
    users: Arc<dyn UserRepository>,
}

impl RequestVerificationHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, user_id: &str) -> Result<(), ApplicationError> {
        let now = Utc::now();
        self.users
            .update(user_id, Box::new(move |user: &mut User| user.mark_verified(now)))
            .await
            .map_err(|err| match err {
                UserRepositoryError::NotFound(_) => ApplicationError::UserNotFound,
                other => other.into(),
            })?;
        tracing::info!(user_id, "user verified");
        Ok(())
    }
}
