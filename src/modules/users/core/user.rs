// User aggregate and the read shapes derived from it.
//
// Boundaries
// - The password hash stays on `User`. Every outward shape drops it.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEMO_USER_EMAIL: &str = "test@example.com";
pub const DEMO_USER_PASSWORD: &str = "password";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub bio: String,
    pub interests: Vec<String>,
    pub profile_picture: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password_hash: Some(password_hash),
            bio: String::new(),
            interests: Vec::new(),
            profile_picture: None,
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Empty values keep what is already stored.
    pub fn apply_profile_changes(&mut self, changes: ProfileChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(bio) = changes.bio.filter(|b| !b.is_empty()) {
            self.bio = bio;
        }
        if let Some(interests) = changes.interests {
            self.interests = interests;
        }
        self.updated_at = now;
    }

    pub fn mark_verified(&mut self, now: DateTime<Utc>) {
        self.verified = true;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub interests: Option<Vec<String>>,
}

/// The caller's own view of their account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub profile_picture: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            interests: user.interests.clone(),
            profile_picture: user.profile_picture.clone(),
            verified: user.verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// What anyone may see about a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub profile_picture: Option<String>,
    pub verified: bool,
}

impl From<&User> for PublicProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            interests: user.interests.clone(),
            profile_picture: user.profile_picture.clone(),
            verified: user.verified,
        }
    }
}

/// The demo account every fresh store starts with.
pub fn demo_user(password_hash: String, now: DateTime<Utc>) -> User {
    User {
        id: "1".into(),
        name: "Test User".into(),
        email: DEMO_USER_EMAIL.into(),
        password_hash: Some(password_hash),
        bio: "I love meeting new people and exploring new interests.".into(),
        interests: vec!["Coffee".into(), "Technology".into(), "Books".into()],
        profile_picture: Some("user1.jpg".into()),
        verified: true,
        created_at: now,
        updated_at: now,
    }
}
