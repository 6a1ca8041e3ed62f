use async_trait::async_trait;
use reqwest::Method;

use fomo_core::ports::{RegistrationApiError, RegistrationApiPort};
use fomo_core::wallet::{WalletAddress, WalletCheck, WalletRegistrationRequest};

use super::ApiClient;

pub struct HttpRegistrationApi {
    client: ApiClient,
}

impl HttpRegistrationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegistrationApiPort for HttpRegistrationApi {
    async fn check_wallet(
        &self,
        address: &WalletAddress,
    ) -> Result<WalletCheck, RegistrationApiError> {
        let url = self.client.segment_url("/wallet/check", address.as_str())?;
        let request = self.client.request(Method::GET, url);
        Ok(self.client.fetch(request).await?)
    }

    async fn register(
        &self,
        request: &WalletRegistrationRequest,
    ) -> Result<(), RegistrationApiError> {
        let request = self.client.post("/wallet/register").json(request);
        Ok(self.client.execute(request).await?)
    }

    async fn update_social(
        &self,
        address: &WalletAddress,
        handle: &str,
    ) -> Result<(), RegistrationApiError> {
        let url = self.client.segment_url("/wallet/update", address.as_str())?;
        let request = self
            .client
            .request(Method::PUT, url)
            .query(&[("twitter_username", handle)]);
        Ok(self.client.execute(request).await?)
    }
}
