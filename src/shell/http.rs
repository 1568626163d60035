use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::events::use_cases::create_event::inbound::http as create_event_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_event_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::events::use_cases::manage_attendance::inbound::http as attendance_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_event_http;
use crate::modules::gateway::use_cases::forward_request::inbound::http as forward_http;
use crate::modules::users::use_cases::login_user::inbound::http as login_http;
use crate::modules::users::use_cases::register_user::inbound::http as register_http;
use crate::modules::users::use_cases::request_verification::inbound::http as verification_http;
use crate::modules::users::use_cases::update_profile::inbound::http as update_profile_http;
use crate::modules::users::use_cases::view_profile::inbound::http as view_profile_http;
use crate::shared::infrastructure::http::middleware::{health, not_found};
use crate::shell::state::{EventsState, GatewayState, UsersState};

pub fn users_router(state: UsersState) -> Router {
    Router::new()
        .route("/auth/register", post(register_http::handle))
        .route("/auth/login", post(login_http::handle))
        .route("/users/me", get(view_profile_http::me))
        .route("/users/profile", put(update_profile_http::handle))
        .route("/users/verify", post(verification_http::handle))
        .route("/users/{id}", get(view_profile_http::by_id))
        .route("/test", get(view_profile_http::test_route))
        .route("/health", health("user-service"))
        .fallback(not_found)
        .with_state(state)
}

pub fn events_router(state: EventsState) -> Router {
    Router::new()
        .route(
            "/events",
            get(list_events_http::list).post(create_event_http::handle),
        )
        .route(
            "/events/{id}",
            get(list_events_http::by_id)
                .put(update_event_http::handle)
                .delete(delete_event_http::handle),
        )
        .route("/events/{id}/join", post(attendance_http::join))
        .route("/events/{id}/leave", post(attendance_http::leave))
        .route("/health", health("event-service"))
        .fallback(not_found)
        .with_state(state)
}

/// Everything except `/health` is handed to the owning service.
pub fn gateway_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", health("api-gateway"))
        .fallback(forward_http::handle)
        .with_state(state)
}
