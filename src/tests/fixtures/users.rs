// Shared test fixture for users.
// Compiled only under `cfg(test)`, exposed as `crate::tests::fixtures::users`.

use chrono::{DateTime, TimeZone, Utc};

use crate::modules::users::core::user::User;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub struct UserBuilder {
    inner: User,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserBuilder {
    pub fn new() -> Self {
        Self {
            inner: User::new(
                "user-fixed-0001",
                "Fixture User",
                "fixture@example.com",
                "not-a-real-hash".to_string(),
                fixed_now(),
            ),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password_hash(mut self, v: Option<String>) -> Self {
        self.inner.password_hash = v;
        self
    }

    pub fn bio(mut self, v: impl Into<String>) -> Self {
        self.inner.bio = v.into();
        self
    }

    pub fn interests(mut self, v: Vec<String>) -> Self {
        self.inner.interests = v;
        self
    }

    pub fn verified(mut self, v: bool) -> Self {
        self.inner.verified = v;
        self
    }

    pub fn build(self) -> User {
        self.inner
    }
}

#[cfg(test)]
mod user_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_an_unverified_password_account_by_default() {
        let user = UserBuilder::default().build();
        assert_eq!(user.id, "user-fixed-0001");
        assert_eq!(user.email, "fixture@example.com");
        assert!(user.password_hash.is_some());
        assert!(!user.verified);
        assert_eq!(user.created_at, fixed_now());
    }

    #[rstest]
    fn it_should_override_fields_through_setters() {
        let user = UserBuilder::new()
            .id("u-9")
            .name("Nia")
            .email("nia@example.com")
            .password_hash(None)
            .bio("Runner")
            .interests(vec!["Running".into()])
            .verified(true)
            .build();
        assert_eq!(user.id, "u-9");
        assert_eq!(user.name, "Nia");
        assert_eq!(user.email, "nia@example.com");
        assert_eq!(user.password_hash, None);
        assert_eq!(user.bio, "Runner");
        assert_eq!(user.interests, vec!["Running"]);
        assert!(user.verified);
    }
}
