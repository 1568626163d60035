use std::sync::Arc;

use crate::modules::events::core::decide::decide_delete;
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::retry::with_retry;

pub struct DeleteEventHandler {
    events: Arc<dyn EventRepository>,
}

impl DeleteEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, event_id: &str, user_id: &str) -> Result<(), ApplicationError> {
        with_retry(event_id, move || async move {
            let loaded = self
                .events
                .load(event_id)
                .await?
                .ok_or(ApplicationError::NotFound)?;
            decide_delete(&loaded.event, user_id)?;
            self.events.remove(event_id, loaded.version).await?;
            tracing::info!(event_id, "event removed");
            Ok::<(), ApplicationError>(())
        })
        .await
    }
}
