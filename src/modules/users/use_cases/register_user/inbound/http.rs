use axum::{Json, extract::State};
use serde::Deserialize;
use validator::Validate;

use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::infrastructure::auth::tokens::TokenResponse;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shared::infrastructure::http::json::ValidatedJson;
use crate::shell::state::UsersState;

#[derive(Deserialize, Validate)]
pub struct RegisterUserBody {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Please include a valid email"),
        email(message = "Please include a valid email")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Please enter a password with 6 or more characters"),
        length(min = 6, message = "Please enter a password with 6 or more characters")
    )]
    pub password: Option<String>,
}

pub async fn handle(
    State(state): State<UsersState>,
    ValidatedJson(body): ValidatedJson<RegisterUserBody>,
) -> Result<Json<TokenResponse>, ApiError> {
    let command = RegisterUser {
        name: body.name.unwrap_or_default(),
        email: body.email.unwrap_or_default(),
        password: body.password.unwrap_or_default(),
    };
    let token = state.register_handler.handle(command).await?;
    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod register_user_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::handle;
    use crate::shell::state::UsersState;
    use crate::tests::fixtures::state::{make_offline_users_state, make_users_state};

    fn app(state: UsersState) -> Router {
        Router::new()
            .route("/auth/register", post(handle))
            .with_state(state)
    }

    async fn register(state: UsersState, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(
                Request::post("/auth/register")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_a_token_for_a_new_user() {
        let (status, json) = register(
            make_users_state(),
            r#"{"name":"Rahul S.","email":"rahul@example.com","password":"secret1"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_when_the_email_exists() {
        let (status, json) = register(
            make_users_state(),
            r#"{"name":"Again","email":"test@example.com","password":"secret1"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["msg"], "User already exists");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_every_invalid_field() {
        let (status, json) = register(
            make_users_state(),
            r#"{"name":"","email":"nope","password":"123"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let msgs: Vec<&str> = json["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["msg"].as_str().unwrap())
            .collect();
        assert_eq!(
            msgs,
            vec![
                "Please include a valid email",
                "Name is required",
                "Please enter a password with 6 or more characters",
            ]
        );
        assert!(json["errors"][2].get("value").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let (status, _) = register(
            make_offline_users_state(),
            r#"{"name":"Rahul S.","email":"rahul@example.com","password":"secret1"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
