use crate::consent::ConsentStatus;

/// Persisted cookie-consent flag.
#[async_trait::async_trait]
pub trait ConsentStatusPort: Send + Sync {
    /// `None` until the visitor has answered.
    async fn get_status(&self) -> anyhow::Result<Option<ConsentStatus>>;
    async fn set_status(&self, status: &ConsentStatus) -> anyhow::Result<()>;
}
