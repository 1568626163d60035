use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shell::state::EventsState;

#[derive(Serialize)]
pub struct EventRemoved {
    pub msg: &'static str,
}

pub async fn handle(
    State(state): State<EventsState>,
    Path(id): Path<String>,
    caller: AuthenticatedUser,
) -> Result<Json<EventRemoved>, ApiError> {
    state.delete_handler.handle(&id, &caller.user_id).await?;
    Ok(Json(EventRemoved {
        msg: "Event removed",
    }))
}
