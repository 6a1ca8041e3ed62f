use async_trait::async_trait;
use serde::Deserialize;

use fomo_core::admin::{AdminLoginResponse, AdminSession};
use fomo_core::ports::{AdminAuthPort, ContentApiError};

use super::ApiClient;

#[derive(Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    valid: bool,
}

pub struct HttpAdminAuth {
    client: ApiClient,
}

impl HttpAdminAuth {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdminAuthPort for HttpAdminAuth {
    async fn login(&self, password: &str) -> Result<AdminLoginResponse, ContentApiError> {
        let request = self
            .client
            .post("/admin/login")
            .json(&serde_json::json!({ "password": password }));
        Ok(self.client.fetch(request).await?)
    }

    async fn verify(&self, session: &AdminSession) -> Result<bool, ContentApiError> {
        let request = self
            .client
            .post("/admin/verify")
            .json(&serde_json::json!({ "token": session.token() }));
        let response: VerifyResponse = self.client.fetch(request).await?;
        Ok(response.valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    fn auth(server: &Server) -> HttpAdminAuth {
        HttpAdminAuth::new(ApiClient::new(server.url(), Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/admin/login")
            .match_body(Matcher::Json(serde_json::json!({"password": "nope"})))
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "Invalid password"}"#)
            .create_async()
            .await;

        let err = auth(&server).login("nope").await.unwrap_err();

        assert_eq!(err, ContentApiError::Unauthorized);
    }

    #[tokio::test]
    async fn verify_reads_valid_flag() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/admin/verify")
            .match_body(Matcher::Json(serde_json::json!({"token": "abc"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"valid": true}"#)
            .create_async()
            .await;

        assert!(auth(&server)
            .verify(&AdminSession::new("abc"))
            .await
            .unwrap());
    }
}
