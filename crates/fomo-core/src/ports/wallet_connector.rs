use async_trait::async_trait;
use tokio::sync::watch;

use super::errors::WalletConnectorError;
use crate::wallet::WalletAddress;

/// Wallet authentication SDK seen from the registration flow.
#[async_trait]
pub trait WalletConnectorPort: Send + Sync {
    /// Prompts the user and resolves to the connected address.
    async fn connect(&self) -> Result<WalletAddress, WalletConnectorError>;

    async fn disconnect(&self) -> Result<(), WalletConnectorError>;

    /// Reactive "current wallet" value. `None` while nothing is connected.
    fn subscribe(&self) -> watch::Receiver<Option<WalletAddress>>;
}
