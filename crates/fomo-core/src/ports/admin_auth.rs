use async_trait::async_trait;

use super::errors::ContentApiError;
use crate::admin::{AdminLoginResponse, AdminSession};

#[async_trait]
pub trait AdminAuthPort: Send + Sync {
    /// `POST /admin/login`; a wrong password surfaces as `Unauthorized`.
    async fn login(&self, password: &str) -> Result<AdminLoginResponse, ContentApiError>;

    /// `POST /admin/verify`
    async fn verify(&self, session: &AdminSession) -> Result<bool, ContentApiError>;
}
