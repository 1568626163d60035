// State fixtures for handler and router tests.
// Every state authenticates any token as user "1" (the seeded demo account) unless a test swaps the verifier.

use std::sync::Arc;
use std::time::Duration;

use crate::modules::events::adapters::outbound::events_in_memory::InMemoryEvents;
use crate::modules::events::adapters::outbound::user_directory::StaticUserDirectory;
use crate::modules::gateway::adapters::outbound::upstream_client::UpstreamClient;
use crate::modules::gateway::core::routes::{RouteTable, SERVICES, ServiceRoute};
use crate::modules::gateway::use_cases::forward_request::handler::ForwardRequestHandler;
use crate::modules::users::adapters::outbound::argon2_password_hasher::Argon2PasswordHasher;
use crate::modules::users::adapters::outbound::users_in_memory::InMemoryUsers;
use crate::modules::users::core::ports::PasswordHasher;
use crate::shared::infrastructure::auth::token_verifier::MockTokenVerifier;
use crate::shared::infrastructure::auth::tokens::JwtCodec;
use crate::shared::infrastructure::config::DEFAULT_FRONTEND_URL;
use crate::shell::state::{EventsState, GatewayState, UsersState};

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Argon2 with the smallest parameters the crate accepts.
pub fn test_hasher() -> Arc<dyn PasswordHasher> {
    Arc::new(Argon2PasswordHasher::with_cost(8, 1, 1).unwrap())
}

pub fn test_jwt_codec() -> JwtCodec {
    JwtCodec::new(TEST_JWT_SECRET, 3600)
}

fn users_state(users: InMemoryUsers) -> UsersState {
    UsersState::new(
        Arc::new(users),
        test_hasher(),
        test_jwt_codec(),
        Arc::new(MockTokenVerifier::new("1")),
    )
}

pub fn make_users_state() -> UsersState {
    users_state(InMemoryUsers::seeded(&*test_hasher()).unwrap())
}

pub fn make_offline_users_state() -> UsersState {
    let mut users = InMemoryUsers::seeded(&*test_hasher()).unwrap();
    users.toggle_offline();
    users_state(users)
}

fn events_state(events: InMemoryEvents) -> EventsState {
    EventsState::new(
        Arc::new(events),
        Arc::new(StaticUserDirectory::default()),
        Arc::new(MockTokenVerifier::new("1")),
    )
}

pub fn make_events_state() -> EventsState {
    events_state(InMemoryEvents::seeded())
}

pub fn make_offline_events_state() -> EventsState {
    let mut events = InMemoryEvents::seeded();
    events.toggle_offline();
    events_state(events)
}

/// Every service is routed to `host:port`.
pub fn make_gateway_state(host: &str, port: u16) -> GatewayState {
    let routes = RouteTable::new(
        SERVICES
            .iter()
            .map(|spec| ServiceRoute::new(spec, host, port))
            .collect(),
    );
    GatewayState::new(ForwardRequestHandler::new(
        routes,
        UpstreamClient::new(Duration::from_secs(2)).unwrap(),
        DEFAULT_FRONTEND_URL,
    ))
}
