//! Registration state machine.
//!
//! Defines a pure state transition function for the wallet registration flow.

use super::{
    InviteCode, RegistrationAction, RegistrationError, RegistrationEvent, RegistrationState,
    RegistrationStep,
};

/// Pure registration state machine.
///
/// No side effects: network and wallet work is described by the returned
/// actions and reported back as events.
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        state: RegistrationState,
        event: RegistrationEvent,
    ) -> (RegistrationState, Vec<RegistrationAction>) {
        use RegistrationEvent as E;
        use RegistrationStep as S;

        let mut state = state;
        match (state.step, event) {
            // Disconnect is accepted from every step.
            (_, E::DisconnectRequested) => (state, vec![RegistrationAction::DisconnectWallet]),
            (_, E::WalletDisconnected) => (state.reset(), Vec::new()),
            (_, E::DisconnectFailed) => {
                state.error = Some(RegistrationError::DisconnectFailed);
                (state, Vec::new())
            }

            (S::ConnectWallet, E::ConnectWalletRequested) => {
                state.error = None;
                (state, vec![RegistrationAction::ConnectWallet])
            }
            (S::ConnectWallet, E::WalletConnectFailed) => {
                state.error = Some(RegistrationError::WalletConnectFailed);
                (state, Vec::new())
            }
            (S::ConnectWallet, E::WalletConnected { address }) => {
                state.wallet_address = Some(address.clone());
                state.error = None;
                (
                    state,
                    vec![RegistrationAction::CheckRegistration { address }],
                )
            }
            (
                S::ConnectWallet,
                E::RegistrationFound {
                    invite_code,
                    social_handle,
                },
            ) if state.wallet_address.is_some() => {
                state.step = S::AlreadyRegistered;
                state.invite_code = invite_code.unwrap_or_default();
                state.social_handle = social_handle.filter(|handle| !handle.is_empty());
                state.error = None;
                (state, Vec::new())
            }
            (S::ConnectWallet, E::RegistrationNotFound | E::RegistrationCheckFailed)
                if state.wallet_address.is_some() =>
            {
                state.step = S::EnterInviteCode;
                state.error = None;
                (state, Vec::new())
            }

            (S::EnterInviteCode, E::InviteCodeEdited { text }) => {
                state.invite_code = InviteCode::normalize_input(&text);
                (state, Vec::new())
            }
            (S::EnterInviteCode, E::SubmitInviteCode { code }) => {
                let Some(address) = state.wallet_address.clone() else {
                    state.error = Some(RegistrationError::WalletConnectFailed);
                    return (state, Vec::new());
                };
                match InviteCode::parse(&code) {
                    None => {
                        state.invite_code = InviteCode::normalize_input(&code);
                        state.error = Some(RegistrationError::InviteCodeEmpty);
                        (state, Vec::new())
                    }
                    Some(code) => {
                        state.invite_code = code.as_str().to_string();
                        state.error = None;
                        (
                            state,
                            vec![RegistrationAction::RedeemInviteCode { address, code }],
                        )
                    }
                }
            }
            (S::EnterInviteCode, E::InviteCodeAccepted) => {
                state.step = S::ConnectSocial;
                state.error = None;
                (state, Vec::new())
            }
            (S::EnterInviteCode, E::InviteCodeRejected { message }) => {
                state.error = Some(RegistrationError::InviteCodeRejected { message });
                (state, Vec::new())
            }
            (S::EnterInviteCode, E::RedemptionFailed) => {
                state.error = Some(RegistrationError::Network);
                (state, Vec::new())
            }

            (S::ConnectSocial, E::LinkSocialRequested) => match state.wallet_address.clone() {
                Some(address) => {
                    state.error = None;
                    (state, vec![RegistrationAction::LinkSocial { address }])
                }
                None => {
                    state.error = Some(RegistrationError::SocialLinkFailed);
                    (state, Vec::new())
                }
            },
            (S::ConnectSocial, E::SocialLinked { handle }) => {
                state.step = S::ReviewAndComplete;
                state.social_handle = Some(handle);
                state.error = None;
                (state, Vec::new())
            }
            (S::ConnectSocial, E::SocialLinkFailed) => {
                state.error = Some(RegistrationError::SocialLinkFailed);
                (state, Vec::new())
            }
            (S::ConnectSocial, E::SkipSocial) => {
                state.step = S::ReviewAndComplete;
                state.error = None;
                (state, Vec::new())
            }

            (S::ReviewAndComplete, E::TermsToggled { accepted }) => {
                state.terms_accepted = accepted;
                if accepted && state.error == Some(RegistrationError::TermsNotAccepted) {
                    state.error = None;
                }
                (state, Vec::new())
            }
            (S::ReviewAndComplete, E::CompleteRequested) => {
                if !state.terms_accepted {
                    state.error = Some(RegistrationError::TermsNotAccepted);
                    return (state, Vec::new());
                }
                state.step = S::Completed;
                state.error = None;
                (
                    state,
                    vec![RegistrationAction::ScheduleRedirect { celebrate: true }],
                )
            }

            (S::AlreadyRegistered, E::ContinueRequested) => {
                state.step = S::Completed;
                state.error = None;
                (
                    state,
                    vec![RegistrationAction::ScheduleRedirect { celebrate: false }],
                )
            }

            (_step, _event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(step = ?_step, event = ?_event, "registration event ignored");
                (state, Vec::new())
            }
        }
    }
}
