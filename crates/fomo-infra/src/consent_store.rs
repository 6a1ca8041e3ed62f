//! File-based cookie consent repository
//!
//! Persists the visitor's consent flag as a small JSON file in the
//! application data directory.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use fomo_core::consent::ConsentStatus;
use fomo_core::ports::ConsentStatusPort;

pub const DEFAULT_CONSENT_FILE: &str = "cookie_consent.json";

pub struct FileConsentRepository {
    consent_file_path: PathBuf,
}

impl FileConsentRepository {
    pub fn new(consent_file_path: PathBuf) -> Self {
        Self { consent_file_path }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            consent_file_path: base_dir.join(DEFAULT_CONSENT_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.consent_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ConsentStatusPort for FileConsentRepository {
    async fn get_status(&self) -> anyhow::Result<Option<ConsentStatus>> {
        if !fs::try_exists(&self.consent_file_path).await? {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.consent_file_path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let status: ConsentStatus = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse cookie consent: {e}"))?;

        Ok(Some(status))
    }

    async fn set_status(&self, status: &ConsentStatus) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(status)
            .map_err(|e| anyhow::anyhow!("Failed to serialize cookie consent: {e}"))?;

        let mut file = fs::File::create(&self.consent_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create consent file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write consent file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync consent file: {e}"))?;

        Ok(())
    }
}
