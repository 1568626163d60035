// Environment backed configuration primitives shared by every binary.
//
// Responsibilities
// - Read variables through an injectable lookup so tests never touch the process environment.
// - Fail loudly on malformed values instead of silently falling back to defaults.

use anyhow::{Context, Result};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3010";
pub const DEFAULT_JWT_SECRET: &str = "tymout_jwt_secret_key_change_in_production";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported {kind} {value:?}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

pub struct EnvReader<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
}

impl<'a> EnvReader<'a> {
    pub fn new(lookup: &'a dyn Fn(&str) -> Option<String>) -> Self {
        Self { lookup }
    }

    /// Value of `key` if set to something other than whitespace.
    pub fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn string(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    pub fn parse<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.optional(key) {
            Some(raw) => raw
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {raw:?}")),
            None => Ok(default),
        }
    }
}

pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Any non-empty token is accepted as the demo user.
    #[default]
    Mock,
    Jwt,
}

impl FromStr for AuthMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "jwt" => Ok(Self::Jwt),
            _ => Err(UnknownVariant {
                kind: "auth mode",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownVariant {
                kind: "log format",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub frontend_url: String,
}

impl CorsConfig {
    pub fn from_reader(env: &EnvReader<'_>) -> Self {
        Self {
            frontend_url: env.string("FRONTEND_URL", DEFAULT_FRONTEND_URL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub mode: AuthMode,
    pub jwt_secret: String,
    pub jwt_ttl_secs: i64,
}

impl AuthConfig {
    pub fn from_reader(env: &EnvReader<'_>) -> Result<Self> {
        Ok(Self {
            mode: env.parse("AUTH_MODE", AuthMode::Mock)?,
            jwt_secret: env.string("JWT_SECRET", DEFAULT_JWT_SECRET),
            jwt_ttl_secs: env.parse("JWT_TTL_SECS", 3600)?,
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
