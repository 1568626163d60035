use axum::{
    body::{Body, to_bytes},
    extract::Request,
    response::Response,
};
use thiserror::Error;

use crate::modules::gateway::adapters::outbound::upstream_client::{ProxyError, UpstreamClient};
use crate::modules::gateway::core::rewrite::rewrite_response_headers;
use crate::modules::gateway::core::routes::RouteTable;

/// Largest request body the gateway buffers before forwarding.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("no service owns this path")]
    NoRoute,

    #[error("request body rejected: {0}")]
    Body(#[source] axum::Error),

    #[error("{service} at {upstream} failed: {source}")]
    Proxy {
        service: &'static str,
        upstream: String,
        #[source]
        source: ProxyError,
    },
}

pub struct ForwardRequestHandler {
    routes: RouteTable,
    client: UpstreamClient,
    frontend_url: String,
}

impl ForwardRequestHandler {
    pub fn new(routes: RouteTable, client: UpstreamClient, frontend_url: impl Into<String>) -> Self {
        Self {
            routes,
            client,
            frontend_url: frontend_url.into(),
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub async fn handle(&self, request: Request<Body>) -> Result<Response, ForwardError> {
        let (parts, body) = request.into_parts();
        let resolved = self
            .routes
            .resolve(parts.uri.path(), parts.uri.query())
            .ok_or(ForwardError::NoRoute)?;
        let url = resolved.url();
        let body = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(ForwardError::Body)?;

        tracing::debug!(service = resolved.route.service, %url, "forwarding request");
        let mut response = self
            .client
            .forward(&url, parts.method, &parts.headers, body)
            .await
            .map_err(|source| ForwardError::Proxy {
                service: resolved.route.service,
                upstream: resolved.route.upstream.clone(),
                source,
            })?;

        rewrite_response_headers(
            response.headers_mut(),
            resolved.route.rewrite,
            &self.frontend_url,
        );
        Ok(response)
    }
}
