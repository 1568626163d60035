use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::modules::users::core::user::{PublicProfile, UserProfile};
use crate::modules::users::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shell::state::UsersState;

#[derive(Serialize)]
pub struct TestRouteMessage {
    pub message: &'static str,
}

pub async fn me(
    State(state): State<UsersState>,
    caller: AuthenticatedUser,
) -> Result<Json<UserProfile>, ApiError> {
    let user = state
        .users
        .find_by_id(&caller.user_id)
        .await
        .map_err(ApplicationError::from)?
        .ok_or(ApplicationError::UserNotFound)?;
    Ok(Json(UserProfile::from(&user)))
}

pub async fn by_id(
    State(state): State<UsersState>,
    Path(id): Path<String>,
) -> Result<Json<PublicProfile>, ApiError> {
    let user = state
        .users
        .find_by_id(&id)
        .await
        .map_err(ApplicationError::from)?
        .ok_or(ApplicationError::UserNotFound)?;
    Ok(Json(PublicProfile::from(&user)))
}

pub async fn test_route() -> Json<TestRouteMessage> {
    Json(TestRouteMessage {
        message: "User service test route is working!",
    })
}

#[cfg(test)]
mod view_profile_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::{by_id, me, test_route};
    use crate::shared::infrastructure::http::auth::AUTH_TOKEN_HEADER;
    use crate::shell::state::UsersState;
    use crate::tests::fixtures::state::{make_offline_users_state, make_users_state};

    fn app(state: UsersState) -> Router {
        Router::new()
            .route("/users/me", get(me))
            .route("/users/{id}", get(by_id))
            .route("/test", get(test_route))
            .with_state(state)
    }

    async fn call(
        state: UsersState,
        uri: &str,
        token: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut request = Request::get(uri);
        if let Some(token) = token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }
        let response = app(state)
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_callers_profile_without_password() {
        let (status, json) = call(make_users_state(), "/users/me", Some("t")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], "1");
        assert_eq!(json["email"], "test@example.com");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_require_a_token_for_me() {
        let (status, json) = call(make_users_state(), "/users/me", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["msg"], "No token, authorization denied");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_public_profile() {
        let (status, json) = call(make_users_state(), "/users/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let mut keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["bio", "id", "interests", "name", "profilePicture", "verified"]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_for_unknown_users() {
        let (status, json) = call(make_users_state(), "/users/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["msg"], "User not found");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let (status, _) = call(make_offline_users_state(), "/users/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_answer_the_test_route() {
        let (status, json) = call(make_users_state(), "/test", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "User service test route is working!");
    }
}
