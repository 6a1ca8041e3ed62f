use serde::{Deserialize, Serialize};

/// Longest invite code the input field accepts while typing.
pub const MAX_INVITE_CODE_LEN: usize = 12;

/// A submitted invite code: trimmed, uppercased, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InviteCode(String);

impl InviteCode {
    /// Normalizes a code for submission: trimmed and uppercased, never truncated.
    ///
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Trimmed, uppercased form of a code that did not come from typing
    /// (submission, referral link).
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Normalization applied while the user is typing: uppercase, capped length.
    pub fn normalize_input(raw: &str) -> String {
        raw.to_uppercase().chars().take(MAX_INVITE_CODE_LEN).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for InviteCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_uppercases() {
        assert_eq!(InviteCode::parse(" ab12 ").unwrap().as_str(), "AB12");
        assert_eq!(InviteCode::parse("welcome1").unwrap().as_str(), "WELCOME1");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert!(InviteCode::parse("").is_none());
        assert!(InviteCode::parse("   \t").is_none());
    }

    #[test]
    fn parse_keeps_codes_longer_than_input_cap() {
        let code = InviteCode::parse(" welcome-friend-2024 ").unwrap();
        assert_eq!(code.as_str(), "WELCOME-FRIEND-2024");
        assert!(code.as_str().len() > MAX_INVITE_CODE_LEN);
    }

    #[test]
    fn normalize_input_caps_length() {
        let typed = InviteCode::normalize_input("abcdefghijklmnop");
        assert_eq!(typed, "ABCDEFGHIJKL");
        assert_eq!(typed.len(), MAX_INVITE_CODE_LEN);
    }
}
