// Per-binary configuration.
//
// Responsibilities
// - Collect everything one process needs from the environment in a single pass.
// - Keep defaults identical to the local development setup (gateway 3000, services 3001+).

use anyhow::Result;
use std::time::Duration;

use crate::modules::gateway::core::routes::{RouteTable, SERVICES, ServiceRoute};
use crate::shared::infrastructure::config::{
    AuthConfig, CorsConfig, EnvReader, LogFormat, process_env,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserServiceConfig {
    pub port: u16,
    pub log_format: LogFormat,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
}

impl UserServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_reader(&EnvReader::new(&process_env))
    }

    pub fn from_reader(env: &EnvReader<'_>) -> Result<Self> {
        Ok(Self {
            port: env.parse("USER_SERVICE_PORT", 3001)?,
            log_format: env.parse("LOG_FORMAT", LogFormat::Text)?,
            cors: CorsConfig::from_reader(env),
            auth: AuthConfig::from_reader(env)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventServiceConfig {
    pub port: u16,
    pub log_format: LogFormat,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
    /// Where to look up display names. Unset means every name falls back to the default.
    pub user_service_url: Option<String>,
    pub user_service_timeout: Duration,
}

impl EventServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_reader(&EnvReader::new(&process_env))
    }

    pub fn from_reader(env: &EnvReader<'_>) -> Result<Self> {
        Ok(Self {
            port: env.parse("EVENT_SERVICE_PORT", 3002)?,
            log_format: env.parse("LOG_FORMAT", LogFormat::Text)?,
            cors: CorsConfig::from_reader(env),
            auth: AuthConfig::from_reader(env)?,
            user_service_url: env.optional("USER_SERVICE_URL"),
            user_service_timeout: Duration::from_secs(env.parse("USER_SERVICE_TIMEOUT_SECS", 5)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub port: u16,
    pub log_format: LogFormat,
    pub cors: CorsConfig,
    pub upstream_host: String,
    pub upstream_timeout: Duration,
    /// Port per entry of `SERVICES`, same order.
    pub service_ports: Vec<u16>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_reader(&EnvReader::new(&process_env))
    }

    pub fn from_reader(env: &EnvReader<'_>) -> Result<Self> {
        let service_ports = SERVICES
            .iter()
            .map(|spec| env.parse(spec.port_env, spec.default_port))
            .collect::<Result<Vec<u16>>>()?;

        Ok(Self {
            port: env.parse("API_GATEWAY_PORT", 3000)?,
            log_format: env.parse("LOG_FORMAT", LogFormat::Text)?,
            cors: CorsConfig::from_reader(env),
            upstream_host: env.string("GATEWAY_UPSTREAM_HOST", "localhost"),
            upstream_timeout: Duration::from_secs(env.parse("GATEWAY_UPSTREAM_TIMEOUT_SECS", 30)?),
            service_ports,
        })
    }

    pub fn route_table(&self) -> RouteTable {
        RouteTable::new(
            SERVICES
                .iter()
                .zip(&self.service_ports)
                .map(|(spec, port)| ServiceRoute::new(spec, &self.upstream_host, *port))
                .collect(),
        )
    }
}
