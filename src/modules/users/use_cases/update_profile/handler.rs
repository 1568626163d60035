use chrono::Utc;
use std::sync::Arc;

use crate::modules::users::core::ports::{UserRepository, UserRepositoryError};
use crate::modules::users::core::user::{ProfileChanges, User};
use crate::modules::users::use_cases::errors::ApplicationError;

pub struct UpdateProfileHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        changes: ProfileChanges,
    ) -> Result<User, ApplicationError> {
        let now = Utc::now();
        self.users
            .update(
                user_id,
                Box::new(move |user: &mut User| user.apply_profile_changes(changes, now)),
            )
            .await
            .map_err(|err| match err {
                UserRepositoryError::NotFound(_) => ApplicationError::UserNotFound,
                other => other.into(),
            })
    }
}
