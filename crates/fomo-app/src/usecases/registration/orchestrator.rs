//! Registration orchestrator.
//!
//! This module coordinates the registration state machine and side effects.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, warn, Instrument};

use fomo_core::{
    config::AppConfig,
    ports::{
        RedirectPort, RegistrationApiError, RegistrationApiPort, RegistrationEventPort,
        SocialAuthPort, WalletConnectorPort,
    },
    registration::{
        RegistrationAction, RegistrationEvent, RegistrationState, RegistrationStateMachine,
        RegistrationStep,
    },
    wallet::{WalletAddress, WalletRegistrationRequest},
};

use super::context::RegistrationContext;

const REDEEM_FALLBACK_MESSAGE: &str = "Failed to verify invite code";

/// Errors produced by the registration orchestrator.
///
/// Failures the user can act on are not errors here: they are recorded in
/// [`RegistrationState::error`] and the call returns `Ok`.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationFlowError {
    #[error("another registration operation is in progress")]
    Busy,
    #[error("redirect failed: {0}")]
    Redirect(#[source] anyhow::Error),
}

/// Where and when to go once the flow completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSettings {
    pub redirect_url: String,
    /// How long the celebration screen stays before redirecting.
    pub celebration_delay: Duration,
}

impl RegistrationSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            redirect_url: config.redirect_url.clone(),
            celebration_delay: Duration::from_millis(config.celebration_delay_ms),
        }
    }
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        Self {
            redirect_url: "/platform".to_string(),
            celebration_delay: Duration::from_millis(3500),
        }
    }
}

/// Orchestrator that drives registration state and side effects.
pub struct RegistrationOrchestrator {
    context: Arc<RegistrationContext>,
    settings: RegistrationSettings,

    wallet: Arc<dyn WalletConnectorPort>,
    registration_api: Arc<dyn RegistrationApiPort>,
    social_auth: Arc<dyn SocialAuthPort>,
    redirect: Arc<dyn RedirectPort>,
    event_port: Arc<dyn RegistrationEventPort>,
}

impl RegistrationOrchestrator {
    pub fn new(
        initial_state: RegistrationState,
        settings: RegistrationSettings,
        wallet: Arc<dyn WalletConnectorPort>,
        registration_api: Arc<dyn RegistrationApiPort>,
        social_auth: Arc<dyn SocialAuthPort>,
        redirect: Arc<dyn RedirectPort>,
        event_port: Arc<dyn RegistrationEventPort>,
    ) -> Self {
        Self {
            context: RegistrationContext::new(initial_state).arc(),
            settings,
            wallet,
            registration_api,
            social_auth,
            redirect,
            event_port,
        }
    }

    pub async fn connect_wallet(&self) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::ConnectWalletRequested)
            .await
    }

    /// The connector reported an address without an explicit connect click.
    ///
    /// Only meaningful on the connect step for a wallet not yet bound;
    /// otherwise the current state is returned untouched.
    pub async fn wallet_changed(
        &self,
        address: WalletAddress,
    ) -> Result<RegistrationState, RegistrationFlowError> {
        let current = self.context.get_state().await;
        if current.step != RegistrationStep::ConnectWallet
            || current.wallet_address.as_ref() == Some(&address)
        {
            return Ok(current);
        }
        self.dispatch(RegistrationEvent::WalletConnected { address })
            .await
    }

    /// Follows the connector's current-wallet value for as long as it lives.
    pub fn watch_wallet(self: &Arc<Self>) -> JoinHandle<()> {
        let mut receiver = self.wallet.subscribe();
        let orchestrator = Arc::clone(self);
        tokio::spawn(async move {
            loop {
                let current = receiver.borrow_and_update().clone();
                if let Some(address) = current {
                    if let Err(err) = orchestrator.wallet_changed(address).await {
                        debug!(error = %err, "wallet change not applied");
                    }
                }
                if receiver.changed().await.is_err() {
                    debug!("wallet connector closed its watch channel");
                    break;
                }
            }
        })
    }

    pub async fn set_invite_code(
        &self,
        text: impl Into<String>,
    ) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::InviteCodeEdited { text: text.into() })
            .await
    }

    pub async fn redeem_invite_code(
        &self,
        code: impl Into<String>,
    ) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::SubmitInviteCode { code: code.into() })
            .await
    }

    pub async fn link_social(&self) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::LinkSocialRequested).await
    }

    pub async fn skip_social(&self) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::SkipSocial).await
    }

    pub async fn set_terms_accepted(
        &self,
        accepted: bool,
    ) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::TermsToggled { accepted })
            .await
    }

    pub async fn complete_registration(&self) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::CompleteRequested).await
    }

    pub async fn continue_to_platform(&self) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::ContinueRequested).await
    }

    pub async fn disconnect_wallet(&self) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::DisconnectRequested).await
    }

    pub async fn state(&self) -> RegistrationState {
        self.context.get_state().await
    }

    pub fn is_loading(&self) -> bool {
        self.context.is_loading()
    }

    pub async fn dispatch(
        &self,
        event: RegistrationEvent,
    ) -> Result<RegistrationState, RegistrationFlowError> {
        let Some(_dispatch_guard) = self.context.try_acquire_dispatch() else {
            debug!(event = ?event, "registration dispatch rejected while busy");
            return Err(RegistrationFlowError::Busy);
        };

        let span = info_span!("usecase.registration_orchestrator.dispatch", event = ?event);
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.step;
                let event_name = format!("{:?}", event);
                let (next, actions) = RegistrationStateMachine::transition(current, event);
                info!(from = ?from, to = ?next.step, event = %event_name, "registration state transition");
                // Published before actions run; the redirect delay shows the Completed state.
                if next != self.context.get_state().await {
                    self.set_state_and_emit(next.clone()).await;
                }
                let follow_up_events = self.execute_actions(actions).await?;
                current = next;
                pending_events.extend(follow_up_events);
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<RegistrationAction>,
    ) -> Result<Vec<RegistrationEvent>, RegistrationFlowError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "registration executing action");
            let follow_up = match action {
                RegistrationAction::ConnectWallet => Some(self.connect_wallet_action().await),
                RegistrationAction::CheckRegistration { address } => {
                    Some(self.check_registration_action(&address).await)
                }
                RegistrationAction::RedeemInviteCode { address, code } => {
                    let request = WalletRegistrationRequest {
                        wallet_address: address,
                        invite_code: code.into_inner(),
                    };
                    Some(self.redeem_action(&request).await)
                }
                RegistrationAction::LinkSocial { address } => {
                    Some(self.link_social_action(&address).await)
                }
                RegistrationAction::ScheduleRedirect { celebrate } => {
                    self.redirect_action(celebrate).await?;
                    None
                }
                RegistrationAction::DisconnectWallet => Some(self.disconnect_action().await),
            };
            follow_up_events.extend(follow_up);
        }

        Ok(follow_up_events)
    }

    async fn connect_wallet_action(&self) -> RegistrationEvent {
        match self.wallet.connect().await {
            Ok(address) => {
                info!(wallet = %address.short(), "wallet connected");
                RegistrationEvent::WalletConnected { address }
            }
            Err(err) => {
                warn!(error = %err, "wallet connect failed");
                RegistrationEvent::WalletConnectFailed
            }
        }
    }

    async fn check_registration_action(&self, address: &WalletAddress) -> RegistrationEvent {
        match self.registration_api.check_wallet(address).await {
            Ok(check) if check.is_registered => {
                info!(wallet = %address.short(), "wallet already registered");
                RegistrationEvent::RegistrationFound {
                    invite_code: check.invite_code,
                    social_handle: check.twitter_username,
                }
            }
            Ok(_) => RegistrationEvent::RegistrationNotFound,
            Err(err) => {
                // Lookup failure fails open: the user can still enter a code.
                warn!(
                    wallet = %address.short(),
                    error = %err,
                    "wallet registration lookup failed, continuing as unregistered"
                );
                RegistrationEvent::RegistrationCheckFailed
            }
        }
    }

    async fn redeem_action(&self, request: &WalletRegistrationRequest) -> RegistrationEvent {
        match self.registration_api.register(request).await {
            Ok(()) => {
                info!(wallet = %request.wallet_address.short(), "invite code accepted");
                RegistrationEvent::InviteCodeAccepted
            }
            Err(RegistrationApiError::Rejected { status, detail }) => {
                warn!(status, detail = ?detail, "invite code rejected");
                RegistrationEvent::InviteCodeRejected {
                    message: detail
                        .filter(|detail| !detail.trim().is_empty())
                        .unwrap_or_else(|| REDEEM_FALLBACK_MESSAGE.to_string()),
                }
            }
            Err(err) => {
                error!(error = %err, "invite code redemption failed");
                RegistrationEvent::RedemptionFailed
            }
        }
    }

    async fn link_social_action(&self, address: &WalletAddress) -> RegistrationEvent {
        let handle = match self.social_auth.authorize(address).await {
            Ok(handle) => handle,
            Err(err) => {
                warn!(error = %err, "social authorization failed");
                return RegistrationEvent::SocialLinkFailed;
            }
        };

        match self.registration_api.update_social(address, &handle).await {
            Ok(()) => {
                info!(wallet = %address.short(), handle = %handle, "social account linked");
                RegistrationEvent::SocialLinked { handle }
            }
            Err(err) => {
                error!(error = %err, "storing social handle failed");
                RegistrationEvent::SocialLinkFailed
            }
        }
    }

    async fn redirect_action(&self, celebrate: bool) -> Result<(), RegistrationFlowError> {
        if celebrate && !self.settings.celebration_delay.is_zero() {
            tokio::time::sleep(self.settings.celebration_delay).await;
        }
        self.redirect
            .redirect(&self.settings.redirect_url)
            .await
            .map_err(|err| {
                error!(error = %err, url = %self.settings.redirect_url, "redirect failed");
                RegistrationFlowError::Redirect(err)
            })
    }

    async fn disconnect_action(&self) -> RegistrationEvent {
        match self.wallet.disconnect().await {
            Ok(()) => RegistrationEvent::WalletDisconnected,
            Err(err) => {
                error!(error = %err, "wallet disconnect failed");
                RegistrationEvent::DisconnectFailed
            }
        }
    }

    async fn set_state_and_emit(&self, state: RegistrationState) {
        self.context.set_state(state.clone()).await;
        self.event_port.emit_state_changed(state).await;
    }
}
