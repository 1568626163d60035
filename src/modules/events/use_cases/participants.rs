use crate::modules::events::core::event::Participant;
use crate::modules::events::core::ports::UserDirectory;

pub const FALLBACK_DISPLAY_NAME: &str = "Test User";

/// A missing or unreachable directory entry falls back to the placeholder name.
pub async fn resolve_participant(directory: &dyn UserDirectory, user_id: &str) -> Participant {
    let name = match directory.display_name(user_id).await {
        Ok(Some(name)) => name,
        Ok(None) => FALLBACK_DISPLAY_NAME.to_string(),
        Err(err) => {
            tracing::warn!(user_id, error = ?err, "user directory lookup failed");
            FALLBACK_DISPLAY_NAME.to_string()
        }
    };
    Participant::new(user_id, name)
}
