// Middleware stack shared by the gateway and every service.
//
// Order, outermost first: request tracing, CORS, security headers, panic -> 500.

use axum::{
    Json, Router,
    http::{
        HeaderName, HeaderValue, Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use anyhow::Context;
use serde::Serialize;
use serde_json::json;
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::shared::infrastructure::config::CorsConfig;
use crate::shared::infrastructure::http::auth::AUTH_TOKEN_HEADER;
use crate::shared::infrastructure::http::errors::ApiError;

const SECURITY_HEADERS: [(&str, &str); 5] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("referrer-policy", "no-referrer"),
    ("x-dns-prefetch-control", "off"),
    ("strict-transport-security", "max-age=15552000; includeSubDomains"),
];

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

pub fn health<S>(service: &'static str) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get(move || async move {
        Json(HealthStatus {
            status: "ok",
            service,
        })
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".into())
}

pub fn cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(&config.frontend_url)
        .with_context(|| format!("invalid FRONTEND_URL {:?}", config.frontend_url))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(AUTH_TOKEN_HEADER),
        ]))
}

pub fn with_common_layers(router: Router, cors: &CorsConfig) -> anyhow::Result<Router> {
    let mut router = router.layer(CatchPanicLayer::custom(panic_response));
    for (name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }
    Ok(router
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http()))
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Something went wrong!" })),
    )
        .into_response()
}

#[cfg(test)]
mod common_layers_tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use rstest::{fixture, rstest};
    use tower::ServiceExt;

    #[fixture]
    fn cors() -> CorsConfig {
        CorsConfig {
            frontend_url: "http://localhost:3010".into(),
        }
    }

    async fn boom() -> &'static str {
        panic!("kaboom")
    }

    fn app(cors: &CorsConfig) -> Router {
        let router = Router::new()
            .route("/health", health("test-service"))
            .route("/boom", get(boom))
            .fallback(not_found);
        with_common_layers(router, cors).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_health(cors: CorsConfig) {
        let response = app(&cors)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({ "status": "ok", "service": "test-service" }));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_turn_panics_into_500(cors: CorsConfig) {
        let response = app(&cors)
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Something went wrong!");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_json_404_for_unknown_paths(cors: CorsConfig) {
        let response = app(&cors)
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_answer_preflight_for_the_frontend_origin(cors: CorsConfig) {
        let response = app(&cors)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/health")
                    .header("origin", "http://localhost:3010")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "http://localhost:3010"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-credentials")
                .unwrap(),
            "true"
        );
    }

    #[rstest]
    fn it_should_reject_an_unusable_frontend_url() {
        let cors = CorsConfig {
            frontend_url: "bad\nurl".into(),
        };
        assert!(cors_layer(&cors).is_err());
    }
}
