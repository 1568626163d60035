use std::sync::Arc;

use tymout::modules::events::adapters::outbound::events_in_memory::InMemoryEvents;
use tymout::modules::events::adapters::outbound::user_directory::{
    HttpUserDirectory, StaticUserDirectory,
};
use tymout::modules::events::core::ports::UserDirectory;
use tymout::shared::infrastructure::auth::token_verifier::verifier_for;
use tymout::shared::infrastructure::auth::tokens::JwtCodec;
use tymout::shared::infrastructure::http::middleware::with_common_layers;
use tymout::shared::infrastructure::telemetry::init_tracing;
use tymout::shell::config::EventServiceConfig;
use tymout::shell::http::events_router;
use tymout::shell::server::serve;
use tymout::shell::state::EventsState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = EventServiceConfig::from_env()?;
    init_tracing(config.log_format);

    if config.auth.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set, verifying tokens with the development secret");
    }

    let directory: Arc<dyn UserDirectory> = match &config.user_service_url {
        Some(url) => {
            tracing::info!(%url, "resolving display names through the user service");
            Arc::new(HttpUserDirectory::new(url.as_str(), config.user_service_timeout)?)
        }
        None => {
            tracing::info!("USER_SERVICE_URL is not set, using fallback display names");
            Arc::new(StaticUserDirectory::default())
        }
    };

    // In-memory deps for now
    let events = Arc::new(InMemoryEvents::seeded());
    let codec = JwtCodec::new(&config.auth.jwt_secret, config.auth.jwt_ttl_secs);
    let verifier = verifier_for(config.auth.mode, codec);

    let state = EventsState::new(events, directory, verifier);
    let app = with_common_layers(events_router(state), &config.cors)?;
    serve("event-service", config.port, app).await
}
