use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::shared::core::validation::{FieldError, field_errors, merge};
use crate::shared::infrastructure::http::errors::ApiError;

/// JSON body that has been deserialized and passed its `validator` rules.
///
/// Malformed bodies and type mismatches are 400s, like rule violations.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = parse_json::<T, S>(req, state).await?;
        body.validate()
            .map_err(|errors| ApiError::Validation(field_errors(&errors)))?;
        Ok(Self(body))
    }
}

/// Field rules that `validator` attributes cannot express.
pub trait FieldChecks {
    fn field_checks(&self) -> Vec<FieldError>;
}

/// Like `ValidatedJson`, with `FieldChecks` reported in the same error list.
pub struct CheckedJson<T>(pub T);

impl<S, T> FromRequest<S> for CheckedJson<T>
where
    T: DeserializeOwned + Validate + FieldChecks,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = parse_json::<T, S>(req, state).await?;
        let errors = merge(body.validate(), body.field_checks());
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }
        Ok(Self(body))
    }
}

/// Deserialize a JSON body, mapping axum's rejection onto our 400 shape.
async fn parse_json<T, S>(req: Request, state: &S) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    Json::<T>::from_request(req, state)
        .await
        .map(|Json(body)| body)
        .map_err(rejection_to_error)
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection, "rejected request body");
    ApiError::Rejected(rejection.body_text())
}
