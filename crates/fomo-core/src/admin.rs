//! Admin panel session.

use serde::{Deserialize, Serialize};

/// Token returned by `POST /admin/login`.
///
/// Held by the caller and handed to every content write; there is no
/// process-wide token store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    token: String,
}

impl AdminSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl std::fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSession")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Response of `POST /admin/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}
