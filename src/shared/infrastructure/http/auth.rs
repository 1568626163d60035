use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;

use crate::shared::infrastructure::auth::token_verifier::{AuthError, TokenVerifier};
use crate::shared::infrastructure::http::errors::ApiError;

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Caller resolved from the `x-auth-token` header. Rejects with 401 before the handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<dyn TokenVerifier>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApiError::Unauthorized(AuthError::MissingToken.to_string()))?;
        // A token that is not visible ASCII was sent but cannot be valid.
        let token = raw
            .to_str()
            .map_err(|_| ApiError::Unauthorized(AuthError::InvalidToken.to_string()))?;

        let verifier = Arc::<dyn TokenVerifier>::from_ref(state);
        let principal = verifier
            .verify(token)
            .map_err(|err| ApiError::Unauthorized(err.to_string()))?;

        Ok(Self {
            user_id: principal.user_id,
        })
    }
}
