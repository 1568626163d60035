use axum::{Json, extract::State};
use serde::Deserialize;
use validator::Validate;

use crate::modules::users::core::user::{ProfileChanges, UserProfile};
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shared::infrastructure::http::json::ValidatedJson;
use crate::shell::state::UsersState;

#[derive(Deserialize, Validate)]
pub struct UpdateProfileBody {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "Bio cannot exceed 500 characters"))]
    pub bio: Option<String>,
    #[validate(required(message = "Interests must be an array"))]
    pub interests: Option<Vec<String>>,
}

pub async fn handle(
    State(state): State<UsersState>,
    caller: AuthenticatedUser,
    ValidatedJson(body): ValidatedJson<UpdateProfileBody>,
) -> Result<Json<UserProfile>, ApiError> {
    let changes = ProfileChanges {
        name: body.name,
        bio: body.bio,
        interests: body.interests,
    };
    let user = state
        .update_profile_handler
        .handle(&caller.user_id, changes)
        .await?;
    Ok(Json(UserProfile::from(&user)))
}
