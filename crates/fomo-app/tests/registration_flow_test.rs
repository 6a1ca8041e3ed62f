use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

use fomo_app::usecases::{RegistrationFlowError, RegistrationOrchestrator, RegistrationSettings};
use fomo_core::ports::{
    RedirectPort, RegistrationApiError, RegistrationApiPort, RegistrationEventPort,
    SocialAuthPort, WalletConnectorError, WalletConnectorPort,
};
use fomo_core::registration::{RegistrationError, RegistrationState, RegistrationStep};
use fomo_core::wallet::{WalletAddress, WalletCheck, WalletRegistrationRequest};

const WALLET: &str = "0x9f2c4E1b7A3d5C8e0F6a2B4d1C3e5F7a9B0c2D4e";

#[derive(Default)]
struct ApiCalls {
    checks: Vec<String>,
    registrations: Vec<WalletRegistrationRequest>,
    social_updates: Vec<(String, String)>,
}

struct FakeRegistrationApi {
    check: Result<WalletCheck, RegistrationApiError>,
    register: Result<(), RegistrationApiError>,
    delay: Duration,
    calls: Mutex<ApiCalls>,
}

impl FakeRegistrationApi {
    fn unregistered() -> Self {
        Self {
            check: Ok(WalletCheck::unregistered()),
            register: Ok(()),
            delay: Duration::ZERO,
            calls: Mutex::new(ApiCalls::default()),
        }
    }

    fn registered(code: &str, handle: &str) -> Self {
        Self {
            check: Ok(WalletCheck::registered(code, Some(handle.to_string()))),
            ..Self::unregistered()
        }
    }
}

#[async_trait]
impl RegistrationApiPort for FakeRegistrationApi {
    async fn check_wallet(
        &self,
        address: &WalletAddress,
    ) -> Result<WalletCheck, RegistrationApiError> {
        self.calls
            .lock()
            .unwrap()
            .checks
            .push(address.as_str().to_string());
        self.check.clone()
    }

    async fn register(
        &self,
        request: &WalletRegistrationRequest,
    ) -> Result<(), RegistrationApiError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.calls
            .lock()
            .unwrap()
            .registrations
            .push(request.clone());
        self.register.clone()
    }

    async fn update_social(
        &self,
        address: &WalletAddress,
        handle: &str,
    ) -> Result<(), RegistrationApiError> {
        self.calls
            .lock()
            .unwrap()
            .social_updates
            .push((address.as_str().to_string(), handle.to_string()));
        Ok(())
    }
}

struct FakeWallet {
    sender: watch::Sender<Option<WalletAddress>>,
}

impl FakeWallet {
    fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }
}

#[async_trait]
impl WalletConnectorPort for FakeWallet {
    async fn connect(&self) -> Result<WalletAddress, WalletConnectorError> {
        let address = WalletAddress::new(WALLET);
        self.sender.send_replace(Some(address.clone()));
        Ok(address)
    }

    async fn disconnect(&self) -> Result<(), WalletConnectorError> {
        self.sender.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<WalletAddress>> {
        self.sender.subscribe()
    }
}

struct PlaceholderSocial;

#[async_trait]
impl SocialAuthPort for PlaceholderSocial {
    async fn authorize(&self, _address: &WalletAddress) -> anyhow::Result<String> {
        Ok("@demo_user".to_string())
    }
}

#[derive(Default)]
struct RecordingRedirect {
    urls: Mutex<Vec<String>>,
}

#[async_trait]
impl RedirectPort for RecordingRedirect {
    async fn redirect(&self, url: &str) -> anyhow::Result<()> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingEvents {
    states: Mutex<Vec<RegistrationState>>,
}

#[async_trait]
impl RegistrationEventPort for RecordingEvents {
    async fn emit_state_changed(&self, state: RegistrationState) {
        self.states.lock().unwrap().push(state);
    }
}

struct Harness {
    orchestrator: Arc<RegistrationOrchestrator>,
    api: Arc<FakeRegistrationApi>,
    wallet: Arc<FakeWallet>,
    redirect: Arc<RecordingRedirect>,
    events: Arc<RecordingEvents>,
}

fn build(api: FakeRegistrationApi) -> Harness {
    build_with(api, RegistrationState::new())
}

fn build_with(api: FakeRegistrationApi, initial: RegistrationState) -> Harness {
    let api = Arc::new(api);
    let wallet = Arc::new(FakeWallet::new());
    let redirect = Arc::new(RecordingRedirect::default());
    let events = Arc::new(RecordingEvents::default());
    let orchestrator = Arc::new(RegistrationOrchestrator::new(
        initial,
        RegistrationSettings {
            redirect_url: "/platform".to_string(),
            celebration_delay: Duration::ZERO,
        },
        wallet.clone(),
        api.clone(),
        Arc::new(PlaceholderSocial),
        redirect.clone(),
        events.clone(),
    ));
    Harness {
        orchestrator,
        api,
        wallet,
        redirect,
        events,
    }
}

#[tokio::test]
async fn registration_flow_registered_wallet_skips_to_already_registered() {
    let h = build(FakeRegistrationApi::registered("VIP001", "@x"));

    let state = h.orchestrator.connect_wallet().await.unwrap();

    assert_eq!(state.step, RegistrationStep::AlreadyRegistered);
    assert_eq!(state.invite_code, "VIP001");
    assert_eq!(state.social_handle.as_deref(), Some("@x"));
    let visited: Vec<RegistrationStep> = h
        .events
        .states
        .lock()
        .unwrap()
        .iter()
        .map(|s| s.step)
        .collect();
    assert!(!visited.contains(&RegistrationStep::EnterInviteCode));
    assert!(!visited.contains(&RegistrationStep::ConnectSocial));
    let calls = h.api.calls.lock().unwrap();
    assert!(calls.registrations.is_empty());
    assert!(calls.social_updates.is_empty());
}

#[tokio::test]
async fn registration_flow_unregistered_or_failed_check_enters_invite_step() {
    let h = build(FakeRegistrationApi::unregistered());
    let state = h.orchestrator.connect_wallet().await.unwrap();
    assert_eq!(state.step, RegistrationStep::EnterInviteCode);

    let failing = FakeRegistrationApi {
        check: Err(RegistrationApiError::Rejected {
            status: 500,
            detail: None,
        }),
        ..FakeRegistrationApi::unregistered()
    };
    let h = build(failing);
    let state = h.orchestrator.connect_wallet().await.unwrap();
    assert_eq!(state.step, RegistrationStep::EnterInviteCode);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn registration_flow_blank_code_is_rejected_without_request() {
    let h = build(FakeRegistrationApi::unregistered());
    h.orchestrator.connect_wallet().await.unwrap();

    for blank in ["", "   "] {
        let state = h.orchestrator.redeem_invite_code(blank).await.unwrap();
        assert_eq!(state.step, RegistrationStep::EnterInviteCode);
        assert_eq!(state.error, Some(RegistrationError::InviteCodeEmpty));
        assert_eq!(
            state.error.as_ref().map(|e| e.user_message()),
            Some("Please enter an invite code".to_string())
        );
    }
    assert!(h.api.calls.lock().unwrap().registrations.is_empty());
}

#[tokio::test]
async fn registration_flow_code_is_trimmed_and_uppercased() {
    let h = build(FakeRegistrationApi::unregistered());
    h.orchestrator.connect_wallet().await.unwrap();

    h.orchestrator.redeem_invite_code(" ab12 ").await.unwrap();

    let calls = h.api.calls.lock().unwrap();
    assert_eq!(calls.registrations.len(), 1);
    assert_eq!(calls.registrations[0].invite_code, "AB12");
    assert_eq!(calls.registrations[0].wallet_address.as_str(), WALLET);
}

#[tokio::test]
async fn registration_flow_long_code_is_sent_whole() {
    let h = build(FakeRegistrationApi::unregistered());
    h.orchestrator.connect_wallet().await.unwrap();

    h.orchestrator
        .redeem_invite_code("welcome-friend-2024")
        .await
        .unwrap();

    let calls = h.api.calls.lock().unwrap();
    assert_eq!(calls.registrations.len(), 1);
    assert_eq!(calls.registrations[0].invite_code, "WELCOME-FRIEND-2024");
}

#[tokio::test]
async fn registration_flow_editing_caps_invite_input() {
    let h = build(FakeRegistrationApi::unregistered());
    h.orchestrator.connect_wallet().await.unwrap();

    let state = h
        .orchestrator
        .set_invite_code("abcdefghijklmnop")
        .await
        .unwrap();

    assert_eq!(state.invite_code, "ABCDEFGHIJKL");
}

#[tokio::test]
async fn registration_flow_complete_requires_terms() {
    let h = build(FakeRegistrationApi::unregistered());
    h.orchestrator.connect_wallet().await.unwrap();
    h.orchestrator.redeem_invite_code("WELCOME1").await.unwrap();
    h.orchestrator.skip_social().await.unwrap();

    let state = h.orchestrator.complete_registration().await.unwrap();
    assert_eq!(state.step, RegistrationStep::ReviewAndComplete);
    assert_eq!(state.error, Some(RegistrationError::TermsNotAccepted));
    assert!(h.redirect.urls.lock().unwrap().is_empty());

    h.orchestrator.set_terms_accepted(true).await.unwrap();
    let state = h.orchestrator.complete_registration().await.unwrap();
    assert_eq!(state.step, RegistrationStep::Completed);

    // A second submit from the terminal step does nothing.
    let state = h.orchestrator.complete_registration().await.unwrap();
    assert_eq!(state.step, RegistrationStep::Completed);
    assert_eq!(*h.redirect.urls.lock().unwrap(), vec!["/platform".to_string()]);
    let completed = h
        .events
        .states
        .lock()
        .unwrap()
        .iter()
        .filter(|s| s.step == RegistrationStep::Completed)
        .count();
    assert_eq!(completed, 1);
}

#[tokio::test]
async fn registration_flow_disconnect_resets_from_every_step() {
    let h = build(FakeRegistrationApi::unregistered());

    h.orchestrator.connect_wallet().await.unwrap();
    let state = h.orchestrator.disconnect_wallet().await.unwrap();
    assert!(state.is_initial());
    assert_eq!(state.step, RegistrationStep::ConnectWallet);

    h.orchestrator.connect_wallet().await.unwrap();
    h.orchestrator.redeem_invite_code("welcome1").await.unwrap();
    h.orchestrator.link_social().await.unwrap();
    h.orchestrator.set_terms_accepted(true).await.unwrap();
    let before = h.orchestrator.state().await;
    assert_eq!(before.step, RegistrationStep::ReviewAndComplete);
    assert!(before.social_handle.is_some());

    let state = h.orchestrator.disconnect_wallet().await.unwrap();
    assert_eq!(state, RegistrationState::new());
    assert!(h.wallet.subscribe().borrow().is_none());

    let h = build(FakeRegistrationApi::registered("VIP001", "@x"));
    h.orchestrator.connect_wallet().await.unwrap();
    let state = h.orchestrator.disconnect_wallet().await.unwrap();
    assert_eq!(state, RegistrationState::new());
}

#[tokio::test]
async fn registration_flow_disconnect_restores_referral_prefill() {
    let h = build_with(
        FakeRegistrationApi::unregistered(),
        RegistrationState::with_referral(Some("friend7".to_string())),
    );
    h.orchestrator.connect_wallet().await.unwrap();
    assert_eq!(h.orchestrator.state().await.invite_code, "FRIEND7");
    h.orchestrator.set_invite_code("other").await.unwrap();

    let state = h.orchestrator.disconnect_wallet().await.unwrap();

    assert!(state.is_initial());
    assert_eq!(state.invite_code, "FRIEND7");
}

#[tokio::test]
async fn registration_flow_end_to_end_new_user() {
    let h = build(FakeRegistrationApi::unregistered());

    h.orchestrator.connect_wallet().await.unwrap();
    let state = h.orchestrator.redeem_invite_code("welcome1").await.unwrap();
    assert_eq!(state.step, RegistrationStep::ConnectSocial);
    h.orchestrator.skip_social().await.unwrap();
    h.orchestrator.set_terms_accepted(true).await.unwrap();
    let state = h.orchestrator.complete_registration().await.unwrap();

    assert_eq!(state.step, RegistrationStep::Completed);
    assert_eq!(state.invite_code, "WELCOME1");
    assert!(state.terms_accepted);
    assert!(state.progress().done);
    assert!(h.api.calls.lock().unwrap().social_updates.is_empty());
}

#[tokio::test]
async fn registration_flow_end_to_end_returning_user() {
    let h = build(FakeRegistrationApi::registered("VIP001", "@x"));

    let state = h.orchestrator.connect_wallet().await.unwrap();
    assert_eq!(state.step, RegistrationStep::AlreadyRegistered);
    assert_eq!(state.invite_code, "VIP001");
    assert_eq!(state.social_handle.as_deref(), Some("@x"));

    let state = h.orchestrator.continue_to_platform().await.unwrap();
    assert_eq!(state.step, RegistrationStep::Completed);

    let calls = h.api.calls.lock().unwrap();
    assert_eq!(calls.checks, vec![WALLET.to_string()]);
    assert!(calls.registrations.is_empty());
    assert!(calls.social_updates.is_empty());
}

#[tokio::test]
async fn registration_flow_overlapping_call_is_busy() {
    let api = FakeRegistrationApi {
        delay: Duration::from_millis(200),
        ..FakeRegistrationApi::unregistered()
    };
    let h = build(api);
    h.orchestrator.connect_wallet().await.unwrap();

    let orchestrator = h.orchestrator.clone();
    let redeem = tokio::spawn(async move { orchestrator.redeem_invite_code("WELCOME1").await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(h.orchestrator.is_loading());
    assert!(matches!(
        h.orchestrator.skip_social().await,
        Err(RegistrationFlowError::Busy)
    ));

    let state = redeem.await.unwrap().unwrap();
    assert_eq!(state.step, RegistrationStep::ConnectSocial);
    assert!(!h.orchestrator.is_loading());
}

#[tokio::test]
async fn registration_flow_watch_wallet_connects_on_external_login() {
    let h = build(FakeRegistrationApi::unregistered());
    let watcher = h.orchestrator.watch_wallet();

    h.wallet
        .sender
        .send_replace(Some(WalletAddress::new(WALLET)));

    let mut step = RegistrationStep::ConnectWallet;
    for _ in 0..50 {
        step = h.orchestrator.state().await.step;
        if step == RegistrationStep::EnterInviteCode {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(step, RegistrationStep::EnterInviteCode);
    watcher.abort();
}
