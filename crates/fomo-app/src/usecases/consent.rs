//! Cookie consent use case.

use std::sync::Arc;

use tracing::{info, warn};

use fomo_core::consent::ConsentStatus;
use fomo_core::ports::{ClockPort, ConsentStatusPort};

#[derive(Debug, thiserror::Error)]
pub enum CookieConsentError {
    #[error("both cookies and privacy policy must be accepted")]
    NotAccepted,
    #[error("failed to persist consent: {0}")]
    Storage(#[source] anyhow::Error),
}

pub struct CookieConsent {
    store: Arc<dyn ConsentStatusPort>,
    clock: Arc<dyn ClockPort>,
}

impl CookieConsent {
    pub fn new(store: Arc<dyn ConsentStatusPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// True until a granted consent is stored. Unreadable storage prompts again.
    pub async fn needs_prompt(&self) -> bool {
        match self.store.get_status().await {
            Ok(Some(status)) => !status.is_granted(),
            Ok(None) => true,
            Err(err) => {
                warn!(error = %err, "failed to read cookie consent");
                true
            }
        }
    }

    pub async fn status(&self) -> anyhow::Result<Option<ConsentStatus>> {
        self.store.get_status().await
    }

    pub async fn accept(&self, cookies: bool, privacy: bool) -> Result<ConsentStatus, CookieConsentError> {
        if !(cookies && privacy) {
            return Err(CookieConsentError::NotAccepted);
        }
        let status = ConsentStatus::accepted_at(self.clock.now());
        self.store
            .set_status(&status)
            .await
            .map_err(CookieConsentError::Storage)?;
        info!(timestamp = ?status.timestamp, "cookie consent stored");
        Ok(status)
    }
}
