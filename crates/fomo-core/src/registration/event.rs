use crate::wallet::WalletAddress;

/// Events that drive the registration flow.
///
/// User intents come from the UI; result events are fed back by the
/// orchestrator after it executed a [`super::RegistrationAction`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationEvent {
    // User intents
    ConnectWalletRequested,
    InviteCodeEdited { text: String },
    SubmitInviteCode { code: String },
    LinkSocialRequested,
    SkipSocial,
    TermsToggled { accepted: bool },
    CompleteRequested,
    ContinueRequested,
    DisconnectRequested,

    // Wallet connector results
    WalletConnected { address: WalletAddress },
    WalletConnectFailed,
    WalletDisconnected,
    DisconnectFailed,

    // Registration API results
    RegistrationFound {
        invite_code: Option<String>,
        social_handle: Option<String>,
    },
    RegistrationNotFound,
    RegistrationCheckFailed,
    InviteCodeAccepted,
    InviteCodeRejected { message: String },
    RedemptionFailed,
    SocialLinked { handle: String },
    SocialLinkFailed,
}
