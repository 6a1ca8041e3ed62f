use super::InviteCode;
use crate::wallet::WalletAddress;

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationAction {
    /// Ask the wallet connector for an address.
    ConnectWallet,

    /// Look up the registration record of a freshly connected wallet.
    CheckRegistration { address: WalletAddress },

    /// Redeem an invite code for the wallet.
    RedeemInviteCode {
        address: WalletAddress,
        code: InviteCode,
    },

    /// Run the social auth flow and store the handle on the registration.
    LinkSocial { address: WalletAddress },

    /// Leave the flow. `celebrate` selects the celebration display delay.
    ScheduleRedirect { celebrate: bool },

    /// Log out of the wallet connector.
    DisconnectWallet,
}
