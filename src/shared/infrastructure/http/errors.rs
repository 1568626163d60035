// One error type for every HTTP handler.
//
// Response shapes
// - Validation: 400 {"errors": [FieldError, ..]}
// - Rejected:   400 {"errors": [{"msg": ..}]}
// - BadRequest: 400 {"msg": ..}
// - Unauthorized / NotFound: 401 / 404 {"msg": ..}
// - Internal: 500 "Server Error", details only in the logs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::shared::core::validation::FieldError;

pub const SERVER_ERROR: &str = "Server Error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::Rejected(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": [{ "msg": msg }] })),
            )
                .into_response(),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "msg": msg }))).into_response()
            }
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "msg": msg }))).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "msg": msg }))).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR).into_response()
            }
        }
    }
}
