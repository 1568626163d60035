use std::sync::Arc;

use tymout::modules::users::adapters::outbound::argon2_password_hasher::Argon2PasswordHasher;
use tymout::modules::users::adapters::outbound::users_in_memory::InMemoryUsers;
use tymout::modules::users::core::ports::PasswordHasher;
use tymout::shared::infrastructure::auth::token_verifier::verifier_for;
use tymout::shared::infrastructure::auth::tokens::JwtCodec;
use tymout::shared::infrastructure::http::middleware::with_common_layers;
use tymout::shared::infrastructure::telemetry::init_tracing;
use tymout::shell::config::UserServiceConfig;
use tymout::shell::http::users_router;
use tymout::shell::server::serve;
use tymout::shell::state::UsersState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = UserServiceConfig::from_env()?;
    init_tracing(config.log_format);

    if config.auth.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set, signing tokens with the development secret");
    }

    // In-memory deps for now
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let users = Arc::new(InMemoryUsers::seeded(hasher.as_ref())?);
    let codec = JwtCodec::new(&config.auth.jwt_secret, config.auth.jwt_ttl_secs);
    let verifier = verifier_for(config.auth.mode, codec.clone());
    tracing::info!(auth_mode = ?config.auth.mode, "user store seeded");

    let state = UsersState::new(users, hasher, codec, verifier);
    let app = with_common_layers(users_router(state), &config.cors)?;
    serve("user-service", config.port, app).await
}
