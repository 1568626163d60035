// Port for turning an `x-auth-token` value into a caller identity.
//
// Two adapters:
// - MockTokenVerifier: any non-empty token is the demo user.
// - JwtTokenVerifier: the token must be a JWT issued by the user service.

use std::sync::Arc;
use thiserror::Error;

use crate::shared::infrastructure::auth::tokens::JwtCodec;
use crate::shared::infrastructure::config::AuthMode;

pub const DEMO_USER_ID: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No token, authorization denied")]
    MissingToken,

    #[error("Token is not valid")]
    InvalidToken,
}

pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

pub struct MockTokenVerifier {
    user_id: String,
}

impl MockTokenVerifier {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl Default for MockTokenVerifier {
    fn default() -> Self {
        Self::new(DEMO_USER_ID)
    }
}

impl TokenVerifier for MockTokenVerifier {
    fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        Ok(Principal {
            user_id: self.user_id.clone(),
        })
    }
}

pub struct JwtTokenVerifier {
    codec: JwtCodec,
}

impl JwtTokenVerifier {
    pub fn new(codec: JwtCodec) -> Self {
        Self { codec }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        match self.codec.verify(token) {
            Ok(claims) => Ok(Principal {
                user_id: claims.user.id,
            }),
            Err(err) => {
                tracing::debug!(error = %err, "rejected auth token");
                Err(AuthError::InvalidToken)
            }
        }
    }
}

pub fn verifier_for(mode: AuthMode, codec: JwtCodec) -> Arc<dyn TokenVerifier> {
    match mode {
        AuthMode::Mock => Arc::new(MockTokenVerifier::default()),
        AuthMode::Jwt => Arc::new(JwtTokenVerifier::new(codec)),
    }
}
