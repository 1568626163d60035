use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::gateway::use_cases::forward_request::handler::ForwardError;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shell::state::GatewayState;

pub const BAD_GATEWAY: &str = "Bad gateway";

pub async fn handle(State(state): State<GatewayState>, request: Request) -> Response {
    match state.forward_handler.handle(request).await {
        Ok(response) => response,
        Err(ForwardError::NoRoute) => ApiError::NotFound("Not found".into()).into_response(),
        Err(ForwardError::Body(err)) => {
            tracing::debug!(error = %err, "unreadable request body");
            ApiError::Rejected(err.to_string()).into_response()
        }
        Err(ForwardError::Proxy {
            service,
            upstream,
            source,
        }) => {
            tracing::error!(service, upstream = %upstream, error = %source, "proxy error");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": BAD_GATEWAY })),
            )
                .into_response()
        }
    }
}
