use serde::{Deserialize, Serialize};

use super::WalletAddress;

/// Response of `GET /wallet/check/{address}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalletCheck {
    pub is_registered: bool,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub invite_code: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
}

impl WalletCheck {
    pub fn unregistered() -> Self {
        Self::default()
    }

    pub fn registered(invite_code: impl Into<String>, twitter_username: Option<String>) -> Self {
        Self {
            is_registered: true,
            wallet_address: None,
            invite_code: Some(invite_code.into()),
            twitter_username,
        }
    }
}

/// Body of `POST /wallet/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRegistrationRequest {
    pub wallet_address: WalletAddress,
    pub invite_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_response_tolerates_missing_optionals() {
        let check: WalletCheck = serde_json::from_str(r#"{"is_registered": false}"#).unwrap();
        assert_eq!(check, WalletCheck::unregistered());
    }

    #[test]
    fn check_response_reads_registered_record() {
        let body = r#"{
            "is_registered": true,
            "wallet_address": "0xabc",
            "invite_code": "VIP001",
            "twitter_username": "@x"
        }"#;
        let check: WalletCheck = serde_json::from_str(body).unwrap();
        assert!(check.is_registered);
        assert_eq!(check.invite_code.as_deref(), Some("VIP001"));
        assert_eq!(check.twitter_username.as_deref(), Some("@x"));
    }

    #[test]
    fn registration_request_serializes_plain_address() {
        let request = WalletRegistrationRequest {
            wallet_address: WalletAddress::new("0xabc"),
            invite_code: "AB12".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"wallet_address": "0xabc", "invite_code": "AB12"})
        );
    }
}
