//! `fomo check`: wallet registration lookup.

use tracing::{info_span, Instrument};

use fomo_core::wallet::{WalletAddress, WalletCheck};

use crate::bootstrap::AppDeps;

pub async fn run(deps: &AppDeps, address: &WalletAddress) -> anyhow::Result<WalletCheck> {
    let span = info_span!("command.check", wallet = %address.short());
    async {
        let check = deps.registration_api.check_wallet(address).await?;
        if check.is_registered {
            println!(
                "{} is registered (invite code: {}, social: {})",
                address,
                check.invite_code.as_deref().unwrap_or("-"),
                check.twitter_username.as_deref().unwrap_or("-"),
            );
        } else {
            println!("{address} is not registered");
        }
        Ok(check)
    }
    .instrument(span)
    .await
}
