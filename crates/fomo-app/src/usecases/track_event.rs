use std::sync::Arc;

use tracing::{debug, warn};

use fomo_core::analytics::AnalyticsEvent;
use fomo_core::ports::AnalyticsPort;

/// Posts an analytics event. Failures are logged and swallowed.
pub struct TrackEvent {
    port: Arc<dyn AnalyticsPort>,
}

impl TrackEvent {
    pub fn new(port: Arc<dyn AnalyticsPort>) -> Self {
        Self { port }
    }

    pub async fn execute(&self, event: AnalyticsEvent) {
        match self.port.track(&event).await {
            Ok(()) => debug!(event_type = ?event.event_type, "analytics event tracked"),
            Err(err) => warn!(error = %err, event_type = ?event.event_type, "analytics tracking failed"),
        }
    }
}
