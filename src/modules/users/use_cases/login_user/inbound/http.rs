use axum::{Json, extract::State};
use serde::Deserialize;
use validator::Validate;

use crate::shared::infrastructure::auth::tokens::TokenResponse;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shared::infrastructure::http::json::ValidatedJson;
use crate::shell::state::UsersState;

#[derive(Deserialize, Validate)]
pub struct LoginUserBody {
    #[validate(
        required(message = "Please include a valid email"),
        email(message = "Please include a valid email")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Password is required"),
        length(min = 1, message = "Password is required")
    )]
    pub password: Option<String>,
}

pub async fn handle(
    State(state): State<UsersState>,
    ValidatedJson(body): ValidatedJson<LoginUserBody>,
) -> Result<Json<TokenResponse>, ApiError> {
    let email = body.email.unwrap_or_default();
    let token = state
        .login_handler
        .handle(&email, body.password.unwrap_or_default())
        .await?;
    Ok(Json(TokenResponse { token }))
}
