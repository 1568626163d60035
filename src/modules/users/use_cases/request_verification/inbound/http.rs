use axum::{Json, extract::State};
use serde::Serialize;

use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shell::state::UsersState;

#[derive(Serialize)]
pub struct VerificationResponse {
    pub msg: &'static str,
}

pub async fn handle(
    State(state): State<UsersState>,
    caller: AuthenticatedUser,
) -> Result<Json<VerificationResponse>, ApiError> {
    state.verification_handler.handle(&caller.user_id).await?;
    Ok(Json(VerificationResponse {
        msg: "Verification request submitted successfully",
    }))
}
