use std::future::Future;

use crate::modules::events::core::ports::EventRepositoryError;
use crate::modules::events::use_cases::errors::ApplicationError;

pub const MAX_ATTEMPTS: usize = 3;

/// Runs a load-decide-write cycle again when the write lost a version race.
pub async fn with_retry<T, F, Fut>(event_id: &str, mut attempt: F) -> Result<T, ApplicationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApplicationError>>,
{
    for round in 1..=MAX_ATTEMPTS {
        match attempt().await {
            Err(ApplicationError::Repository(EventRepositoryError::VersionMismatch {
                expected,
                actual,
                ..
            })) => {
                tracing::debug!(event_id, round, expected, actual, "stale event write, retrying");
            }
            outcome => return outcome,
        }
    }
    tracing::warn!(event_id, "event write contention, giving up");
    Err(ApplicationError::Contention(event_id.to_string()))
}
