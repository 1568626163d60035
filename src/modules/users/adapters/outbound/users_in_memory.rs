// In memory implementation of the UserRepository port.
//
// Purpose
// - Back the user service until a real database exists.
//
// Responsibilities
// - Keep users in insertion order.
// - Enforce unique emails on insert.
// - Apply updates under the write lock so concurrent changes compose.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::modules::users::core::ports::{
    PasswordHasher, UserChange, UserRepository, UserRepositoryError,
};
use crate::modules::users::core::user::{DEMO_USER_PASSWORD, User, demo_user};

#[derive(Default)]
pub struct InMemoryUsers {
    rows: RwLock<Vec<User>>,
    is_offline: bool,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demo account, with its password hashed by `hasher`.
    pub fn seeded(hasher: &dyn PasswordHasher) -> anyhow::Result<Self> {
        let hash = hasher.hash(DEMO_USER_PASSWORD)?;
        Ok(Self {
            rows: RwLock::new(vec![demo_user(hash, Utc::now())]),
            is_offline: false,
        })
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), UserRepositoryError> {
        if self.is_offline {
            return Err(anyhow::anyhow!("User repository offline").into());
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, user: User) -> Result<(), UserRepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.iter().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::DuplicateEmail(user.email));
        }
        guard.push(user);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserRepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update(&self, id: &str, change: UserChange) -> Result<User, UserRepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let user = guard
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| UserRepositoryError::NotFound(id.to_string()))?;
        change(&mut *user);
        Ok(user.clone())
    }
}
