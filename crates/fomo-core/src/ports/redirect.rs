/// Navigates away from the registration flow once it completes.
#[async_trait::async_trait]
pub trait RedirectPort: Send + Sync {
    async fn redirect(&self, url: &str) -> anyhow::Result<()>;
}
