use crate::registration::RegistrationState;

/// Notifies whoever renders the flow that the state changed.
#[async_trait::async_trait]
pub trait RegistrationEventPort: Send + Sync {
    async fn emit_state_changed(&self, state: RegistrationState);
}
