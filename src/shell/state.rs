use axum::extract::FromRef;
use std::sync::Arc;

use crate::modules::events::core::ports::{EventRepository, UserDirectory};
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::manage_attendance::handler::AttendanceHandler;
use crate::modules::events::use_cases::update_event::handler::UpdateEventHandler;
use crate::modules::gateway::use_cases::forward_request::handler::ForwardRequestHandler;
use crate::modules::users::core::ports::{PasswordHasher, UserRepository};
use crate::modules::users::use_cases::login_user::handler::LoginUserHandler;
use crate::modules::users::use_cases::register_user::handler::RegisterUserHandler;
use crate::modules::users::use_cases::request_verification::handler::RequestVerificationHandler;
use crate::modules::users::use_cases::update_profile::handler::UpdateProfileHandler;
use crate::shared::infrastructure::auth::token_verifier::TokenVerifier;
use crate::shared::infrastructure::auth::tokens::JwtCodec;

#[derive(Clone)]
pub struct UsersState {
    pub users: Arc<dyn UserRepository>,
    pub register_handler: Arc<RegisterUserHandler>,
    pub login_handler: Arc<LoginUserHandler>,
    pub update_profile_handler: Arc<UpdateProfileHandler>,
    pub verification_handler: Arc<RequestVerificationHandler>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl UsersState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: JwtCodec,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            register_handler: Arc::new(RegisterUserHandler::new(
                users.clone(),
                hasher.clone(),
                tokens.clone(),
            )),
            login_handler: Arc::new(LoginUserHandler::new(users.clone(), hasher, tokens)),
            update_profile_handler: Arc::new(UpdateProfileHandler::new(users.clone())),
            verification_handler: Arc::new(RequestVerificationHandler::new(users.clone())),
            users,
            verifier,
        }
    }
}

impl FromRef<UsersState> for Arc<dyn TokenVerifier> {
    fn from_ref(state: &UsersState) -> Self {
        state.verifier.clone()
    }
}

#[derive(Clone)]
pub struct EventsState {
    pub events: Arc<dyn EventRepository>,
    pub create_handler: Arc<CreateEventHandler>,
    pub update_handler: Arc<UpdateEventHandler>,
    pub delete_handler: Arc<DeleteEventHandler>,
    pub attendance_handler: Arc<AttendanceHandler>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl EventsState {
    pub fn new(
        events: Arc<dyn EventRepository>,
        directory: Arc<dyn UserDirectory>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            create_handler: Arc::new(CreateEventHandler::new(events.clone(), directory.clone())),
            update_handler: Arc::new(UpdateEventHandler::new(events.clone())),
            delete_handler: Arc::new(DeleteEventHandler::new(events.clone())),
            attendance_handler: Arc::new(AttendanceHandler::new(events.clone(), directory)),
            events,
            verifier,
        }
    }
}

impl FromRef<EventsState> for Arc<dyn TokenVerifier> {
    fn from_ref(state: &EventsState) -> Self {
        state.verifier.clone()
    }
}

#[derive(Clone)]
pub struct GatewayState {
    pub forward_handler: Arc<ForwardRequestHandler>,
}

impl GatewayState {
    pub fn new(forward_handler: ForwardRequestHandler) -> Self {
        Self {
            forward_handler: Arc::new(forward_handler),
        }
    }
}
