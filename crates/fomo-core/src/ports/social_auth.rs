use crate::wallet::WalletAddress;

/// Obtains the social handle to attach to a registration.
#[async_trait::async_trait]
pub trait SocialAuthPort: Send + Sync {
    async fn authorize(&self, address: &WalletAddress) -> anyhow::Result<String>;
}
