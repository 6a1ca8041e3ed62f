use tokio::sync::watch;
use tracing::info;

use fomo_core::ports::{WalletConnectorError, WalletConnectorPort};
use fomo_core::wallet::WalletAddress;

/// Wallet connector backed by a locally supplied address.
///
/// `connect` signs in with the configured address and publishes it on the
/// current-wallet channel; `disconnect` clears it.
pub struct LocalWalletConnector {
    address: Option<WalletAddress>,
    current: watch::Sender<Option<WalletAddress>>,
}

impl LocalWalletConnector {
    pub fn new(address: Option<WalletAddress>) -> Self {
        let (current, _) = watch::channel(None);
        Self { address, current }
    }
}

#[async_trait::async_trait]
impl WalletConnectorPort for LocalWalletConnector {
    async fn connect(&self) -> Result<WalletAddress, WalletConnectorError> {
        let address = self
            .address
            .clone()
            .filter(|address| !address.as_str().is_empty())
            .ok_or(WalletConnectorError::Unavailable)?;
        info!(wallet = %address.short(), "wallet signed in");
        self.current.send_replace(Some(address.clone()));
        Ok(address)
    }

    async fn disconnect(&self) -> Result<(), WalletConnectorError> {
        self.current.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<WalletAddress>> {
        self.current.subscribe()
    }
}
