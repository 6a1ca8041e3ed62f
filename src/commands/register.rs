//! `fomo register`: drives the registration flow end to end.

use anyhow::{bail, Context};
use tracing::{info_span, Instrument};

use fomo_core::analytics::AnalyticsEvent;
use fomo_core::registration::{RegistrationState, RegistrationStep};
use fomo_core::wallet::WalletAddress;

use crate::bootstrap::AppDeps;

#[derive(Debug, Clone, Default)]
pub struct RegisterArgs {
    pub invite_code: Option<String>,
    pub referral_code: Option<String>,
    pub link_social: bool,
    pub accept_terms: bool,
}

/// Runs the flow for the wallet the deps were wired with.
///
/// Returns the final state; a flow error the user must act on is an `Err`
/// carrying its display message.
pub async fn run(deps: &AppDeps, args: RegisterArgs) -> anyhow::Result<RegistrationState> {
    let span = info_span!("command.register");
    async {
        let orchestrator = deps.registration(args.referral_code.clone());

        let mut state = orchestrator
            .connect_wallet()
            .await
            .context("connect wallet")?;
        fail_on_error(&state)?;

        if state.step == RegistrationStep::AlreadyRegistered {
            let wallet = state.wallet_address.as_ref().map(WalletAddress::short);
            println!(
                "Wallet {} is already registered.",
                wallet.unwrap_or_default()
            );
            let state = orchestrator
                .continue_to_platform()
                .await
                .context("continue to platform")?;
            print_redirect(deps);
            return Ok(state);
        }

        if state.step == RegistrationStep::EnterInviteCode {
            let code = args
                .invite_code
                .clone()
                .unwrap_or_else(|| state.invite_code.clone());
            state = orchestrator
                .redeem_invite_code(code)
                .await
                .context("redeem invite code")?;
            fail_on_error(&state)?;
            println!("Invite code {} accepted.", state.invite_code);
        }

        if state.step == RegistrationStep::ConnectSocial {
            state = if args.link_social {
                orchestrator.link_social().await
            } else {
                orchestrator.skip_social().await
            }
            .context("social step")?;
            if let Some(handle) = &state.social_handle {
                println!("Linked social account {handle}.");
            }
            fail_on_error(&state)?;
        }

        if state.step == RegistrationStep::ReviewAndComplete {
            orchestrator
                .set_terms_accepted(args.accept_terms)
                .await
                .context("accept terms")?;
            state = orchestrator
                .complete_registration()
                .await
                .context("complete registration")?;
            fail_on_error(&state)?;
        }

        if state.step.is_terminal() {
            println!("Welcome to FOMO! Registration complete.");
            let session_id = AnalyticsEvent::new_session_id();
            deps.track_event()
                .execute(AnalyticsEvent::conversion(session_id))
                .await;
        }
        print_redirect(deps);

        Ok(state)
    }
    .instrument(span)
    .await
}

fn print_redirect(deps: &AppDeps) {
    if let Some(target) = deps.redirect.last_target() {
        println!("Continue at {target}");
    }
}

fn fail_on_error(state: &RegistrationState) -> anyhow::Result<()> {
    match &state.error {
        Some(error) => bail!("{}", error.user_message()),
        None => Ok(()),
    }
}
