use tymout::modules::gateway::adapters::outbound::upstream_client::UpstreamClient;
use tymout::modules::gateway::use_cases::forward_request::handler::ForwardRequestHandler;
use tymout::shared::infrastructure::http::middleware::with_common_layers;
use tymout::shared::infrastructure::telemetry::init_tracing;
use tymout::shell::config::GatewayConfig;
use tymout::shell::http::gateway_router;
use tymout::shell::server::serve;
use tymout::shell::state::GatewayState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = GatewayConfig::from_env()?;
    init_tracing(config.log_format);

    let handler = ForwardRequestHandler::new(
        config.route_table(),
        UpstreamClient::new(config.upstream_timeout)?,
        config.cors.frontend_url.clone(),
    );
    for route in handler.routes().routes() {
        tracing::info!(service = route.service, prefix = %route.prefix, upstream = %route.upstream, "route");
    }

    let app = with_common_layers(gateway_router(GatewayState::new(handler)), &config.cors)?;
    serve("api-gateway", config.port, app).await
}
