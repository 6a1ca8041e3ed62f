//! Admin session use cases.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use fomo_core::admin::AdminSession;
use fomo_core::ports::{AdminAuthPort, ContentApiError};

#[derive(Debug, thiserror::Error)]
pub enum AdminLoginError {
    #[error("password is required")]
    EmptyPassword,
    #[error("invalid password")]
    InvalidPassword,
    #[error(transparent)]
    Api(ContentApiError),
}

/// Exchanges the admin password for a session token.
pub struct AdminLogin {
    port: Arc<dyn AdminAuthPort>,
}

impl AdminLogin {
    pub fn new(port: Arc<dyn AdminAuthPort>) -> Self {
        Self { port }
    }

    pub async fn execute(&self, password: &str) -> Result<AdminSession, AdminLoginError> {
        if password.is_empty() {
            return Err(AdminLoginError::EmptyPassword);
        }
        let span = info_span!("usecase.admin_login.execute");

        async {
            let response = self.port.login(password).await.map_err(|err| match err {
                ContentApiError::Unauthorized => AdminLoginError::InvalidPassword,
                other => AdminLoginError::Api(other),
            })?;
            if !response.success || response.token.is_empty() {
                warn!(message = ?response.message, "admin login refused");
                return Err(AdminLoginError::InvalidPassword);
            }
            info!("admin logged in");
            Ok(AdminSession::new(response.token))
        }
        .instrument(span)
        .await
    }
}

/// Checks a stored token before showing the admin panel.
pub struct VerifyAdminSession {
    port: Arc<dyn AdminAuthPort>,
}

impl VerifyAdminSession {
    pub fn new(port: Arc<dyn AdminAuthPort>) -> Self {
        Self { port }
    }

    /// Any failure to verify counts as an invalid session.
    pub async fn execute(&self, session: &AdminSession) -> bool {
        match self.port.verify(session).await {
            Ok(valid) => valid,
            Err(err) => {
                warn!(error = %err, "admin session verification failed");
                false
            }
        }
    }
}
