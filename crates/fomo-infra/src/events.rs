use tokio::sync::watch;
use tracing::debug;

use fomo_core::ports::RegistrationEventPort;
use fomo_core::registration::RegistrationState;

/// Publishes registration state on a watch channel for UI subscribers.
pub struct WatchRegistrationEvents {
    sender: watch::Sender<RegistrationState>,
}

impl WatchRegistrationEvents {
    pub fn new(initial: RegistrationState) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<RegistrationState> {
        self.sender.subscribe()
    }
}

#[async_trait::async_trait]
impl RegistrationEventPort for WatchRegistrationEvents {
    async fn emit_state_changed(&self, state: RegistrationState) {
        debug!(step = ?state.step, error = ?state.error, "registration state changed");
        self.sender.send_replace(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fomo_core::registration::RegistrationStep;

    #[tokio::test]
    async fn subscribers_see_latest_state() {
        let events = WatchRegistrationEvents::new(RegistrationState::new());
        let mut receiver = events.subscribe();

        let mut state = RegistrationState::new();
        state.step = RegistrationStep::EnterInviteCode;
        events.emit_state_changed(state).await;

        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow().step, RegistrationStep::EnterInviteCode);
    }
}
