/// Errors shown inside the registration flow.
///
/// Every variant is terminal for the current attempt; the user retries by
/// acting again. Lookup failures never appear here, the flow recovers from
/// them by treating the wallet as unregistered.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationError {
    /// Submitted invite code was empty after trimming.
    InviteCodeEmpty,
    /// Completion attempted without accepting the terms.
    TermsNotAccepted,
    /// Server refused the invite code; `message` is the server's `detail`.
    InviteCodeRejected { message: String },
    /// Transport or unexpected failure during redemption.
    Network,
    /// Social account could not be linked.
    SocialLinkFailed,
    /// Wallet connector did not produce an address.
    WalletConnectFailed,
    /// Wallet connector logout failed.
    DisconnectFailed,
}

impl RegistrationError {
    /// Message displayed to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InviteCodeEmpty => "Please enter an invite code".to_string(),
            Self::TermsNotAccepted => "Please accept the Terms and Privacy Policy".to_string(),
            Self::InviteCodeRejected { message } => message.clone(),
            Self::Network => "Failed to verify invite code. Please try again.".to_string(),
            Self::SocialLinkFailed => "Failed to connect Twitter. Please try again.".to_string(),
            Self::WalletConnectFailed => "Failed to connect wallet. Please try again.".to_string(),
            Self::DisconnectFailed => "Failed to disconnect wallet".to_string(),
        }
    }

    /// True for errors detected locally before any request was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InviteCodeEmpty | Self::TermsNotAccepted)
    }
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.user_message())
    }
}
