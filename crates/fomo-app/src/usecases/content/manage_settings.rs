use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fomo_core::admin::AdminSession;
use fomo_core::content::{SettingsDocument, SettingsPatch};
use fomo_core::ports::SettingsDocumentPort;

use super::ContentError;

/// Reads and edits one settings document.
pub struct ManageSettings<T: SettingsDocument> {
    port: Arc<dyn SettingsDocumentPort<T>>,
}

impl<T: SettingsDocument> ManageSettings<T> {
    pub fn new(port: Arc<dyn SettingsDocumentPort<T>>) -> Self {
        Self { port }
    }

    pub async fn get(&self) -> Result<T, ContentError> {
        Ok(self.port.get().await?)
    }

    pub async fn update(&self, session: &AdminSession, patch: SettingsPatch) -> Result<T, ContentError> {
        if patch.is_empty() {
            return Err(ContentError::EmptyPatch);
        }
        let span = info_span!("usecase.manage_settings.update", document = T::NAME);

        async {
            let keys: Vec<&String> = patch.keys().collect();
            info!(keys = ?keys, "updating settings document");
            let updated = self.port.update(session, &patch).await?;
            Ok(updated)
        }
        .instrument(span)
        .await
    }
}
