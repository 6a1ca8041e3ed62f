use async_trait::async_trait;

use super::errors::RegistrationApiError;
use crate::wallet::{WalletAddress, WalletCheck, WalletRegistrationRequest};

#[async_trait]
pub trait RegistrationApiPort: Send + Sync {
    /// `GET /wallet/check/{address}`
    async fn check_wallet(&self, address: &WalletAddress)
        -> Result<WalletCheck, RegistrationApiError>;

    /// `POST /wallet/register`
    async fn register(&self, request: &WalletRegistrationRequest)
        -> Result<(), RegistrationApiError>;

    /// `PUT /wallet/update/{address}?twitter_username=`
    async fn update_social(
        &self,
        address: &WalletAddress,
        handle: &str,
    ) -> Result<(), RegistrationApiError>;
}
