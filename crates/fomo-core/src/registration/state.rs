use serde::{Deserialize, Serialize};

use super::{InviteCode, RegistrationError};
use crate::wallet::WalletAddress;

/// Registration flow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationStep {
    /// Modal opened, no wallet bound yet.
    ConnectWallet,
    /// Wallet connected and not registered: redeem an invite code.
    EnterInviteCode,
    /// Invite code redeemed: optionally link a social account.
    ConnectSocial,
    /// Social step resolved: accept terms and finish.
    ReviewAndComplete,
    /// Wallet lookup found an existing registration.
    AlreadyRegistered,
    /// Terminal.
    Completed,
}

impl RegistrationStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Milestones shown in the flow's progress indicator (Wallet / Invite / Twitter / Done).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepProgress {
    pub wallet: bool,
    pub invite: bool,
    pub social: bool,
    pub done: bool,
}

/// Transient state of one registration modal session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationState {
    pub step: RegistrationStep,
    pub wallet_address: Option<WalletAddress>,
    /// Uppercased, length-capped invite code.
    pub invite_code: String,
    pub social_handle: Option<String>,
    pub terms_accepted: bool,
    pub error: Option<RegistrationError>,
    /// Invite code carried by the landing URL; initial value of `invite_code`.
    pub referral_code: Option<String>,
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::with_referral(None)
    }

    /// Initial state with the invite input prefilled from a referral link.
    pub fn with_referral(referral_code: Option<String>) -> Self {
        let referral_code = referral_code
            .map(|code| InviteCode::normalize(&code))
            .filter(|code| !code.is_empty());
        Self {
            step: RegistrationStep::ConnectWallet,
            wallet_address: None,
            invite_code: referral_code.clone().unwrap_or_default(),
            social_handle: None,
            terms_accepted: false,
            error: None,
            referral_code,
        }
    }

    /// Fresh initial state for the same modal session.
    pub fn reset(&self) -> Self {
        Self::with_referral(self.referral_code.clone())
    }

    pub fn is_initial(&self) -> bool {
        *self == self.reset()
    }

    pub fn progress(&self) -> StepProgress {
        use RegistrationStep::*;
        StepProgress {
            wallet: self.wallet_address.is_some(),
            invite: matches!(
                self.step,
                ConnectSocial | ReviewAndComplete | AlreadyRegistered | Completed
            ),
            social: self.social_handle.is_some()
                || matches!(self.step, ReviewAndComplete | Completed),
            done: matches!(self.step, AlreadyRegistered | Completed),
        }
    }
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referral_code_prefills_invite_input() {
        let state = RegistrationState::with_referral(Some(" welcome1 ".into()));
        assert_eq!(state.invite_code, "WELCOME1");
        assert_eq!(state.referral_code.as_deref(), Some("WELCOME1"));
        assert_eq!(state.step, RegistrationStep::ConnectWallet);
    }

    #[test]
    fn long_referral_code_is_not_truncated() {
        let state = RegistrationState::with_referral(Some("partner-campaign-01".into()));
        assert_eq!(state.invite_code, "PARTNER-CAMPAIGN-01");
        assert_eq!(state.referral_code.as_deref(), Some("PARTNER-CAMPAIGN-01"));
    }

    #[test]
    fn blank_referral_code_is_ignored() {
        let state = RegistrationState::with_referral(Some("   ".into()));
        assert_eq!(state, RegistrationState::new());
    }

    #[test]
    fn reset_keeps_referral_and_clears_everything_else() {
        let mut state = RegistrationState::with_referral(Some("REF1".into()));
        state.step = RegistrationStep::ReviewAndComplete;
        state.wallet_address = Some(WalletAddress::new("0xabc"));
        state.invite_code = "OTHER".into();
        state.social_handle = Some("@me".into());
        state.terms_accepted = true;
        state.error = Some(RegistrationError::Network);

        let reset = state.reset();

        assert_eq!(reset, RegistrationState::with_referral(Some("REF1".into())));
        assert!(reset.is_initial());
    }

    #[test]
    fn progress_for_already_registered_marks_done() {
        let mut state = RegistrationState::new();
        state.wallet_address = Some(WalletAddress::new("0xabc"));
        state.step = RegistrationStep::AlreadyRegistered;

        let progress = state.progress();

        assert!(progress.wallet);
        assert!(progress.invite);
        assert!(!progress.social);
        assert!(progress.done);
    }
}
