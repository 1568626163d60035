// HTTP client used to reach the services behind the gateway.
//
// Responsibilities
// - Send the forwarded request without following redirects.
// - Drop hop-by-hop headers in both directions, plus those listed in `Connection`.

use anyhow::Context;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, Method, header},
    response::Response,
};
use std::time::Duration;
use thiserror::Error;

const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("upstream response body failed: {0}")]
    ResponseBody(#[source] reqwest::Error),
}

/// Copy of `headers` without `host` and hop-by-hop headers, including any named in `Connection`.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    out.remove(header::HOST);
    let named: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|token| HeaderName::from_bytes(token.trim().as_bytes()).ok())
        .collect();
    for name in named {
        out.remove(name);
    }
    for name in HOP_BY_HOP.iter() {
        out.remove(name);
    }
    out
}

#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(timeout)
            .build()
            .context("failed to build upstream http client")?;
        Ok(Self { client })
    }

    pub async fn forward(
        &self,
        url: &str,
        method: Method,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response, ProxyError> {
        let upstream = self
            .client
            .request(method, url)
            .headers(forwardable_headers(headers))
            .body(body)
            .send()
            .await
            .map_err(ProxyError::Unreachable)?;

        let status = upstream.status();
        let headers = forwardable_headers(upstream.headers());
        let bytes = upstream.bytes().await.map_err(ProxyError::ResponseBody)?;

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

#[cfg(test)]
mod upstream_client_tests {
    use super::*;
    use axum::http::HeaderValue;
    use rstest::rstest;

    #[rstest]
    fn it_should_drop_host_and_hop_by_hop_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("gateway:3000"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
        headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
        headers.insert("x-auth-token", HeaderValue::from_static("abc"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let forwarded = forwardable_headers(&headers);

        assert_eq!(forwarded.len(), 2);
        assert_eq!(forwarded.get("x-auth-token").unwrap(), "abc");
        assert!(forwarded.get(header::HOST).is_none());
    }

    #[rstest]
    fn it_should_drop_headers_named_in_connection() {
        let mut headers = HeaderMap::new();
        headers.append(
            header::CONNECTION,
            HeaderValue::from_static("keep-alive, X-Private-Hop"),
        );
        headers.append(header::CONNECTION, HeaderValue::from_static("x-trace-hop"));
        headers.insert("x-private-hop", HeaderValue::from_static("secret"));
        headers.insert("x-trace-hop", HeaderValue::from_static("1"));
        headers.insert("x-auth-token", HeaderValue::from_static("abc"));

        let forwarded = forwardable_headers(&headers);

        assert!(forwarded.get("x-private-hop").is_none());
        assert!(forwarded.get("x-trace-hop").is_none());
        assert_eq!(forwarded.len(), 1);
        assert_eq!(forwarded.get("x-auth-token").unwrap(), "abc");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_unreachable_upstreams() {
        let client = UpstreamClient::new(Duration::from_millis(500)).unwrap();
        let err = client
            .forward(
                "http://127.0.0.1:9/health",
                Method::GET,
                &HeaderMap::new(),
                Bytes::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProxyError::Unreachable(_)));
    }
}
