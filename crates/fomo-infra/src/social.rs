use tracing::info;

use fomo_core::ports::SocialAuthPort;
use fomo_core::wallet::WalletAddress;

/// Stand-in for the social OAuth flow: always yields the configured handle.
pub struct PlaceholderSocialAuth {
    handle: String,
}

impl PlaceholderSocialAuth {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
        }
    }
}

#[async_trait::async_trait]
impl SocialAuthPort for PlaceholderSocialAuth {
    async fn authorize(&self, address: &WalletAddress) -> anyhow::Result<String> {
        if self.handle.trim().is_empty() {
            anyhow::bail!("no social handle configured");
        }
        info!(wallet = %address.short(), handle = %self.handle, "social account authorized");
        Ok(self.handle.clone())
    }
}
