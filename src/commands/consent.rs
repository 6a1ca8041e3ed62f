//! `fomo consent`: the locally stored cookie consent flag.

use fomo_core::consent::ConsentStatus;

use crate::bootstrap::AppDeps;

pub async fn status(deps: &AppDeps) -> anyhow::Result<Option<ConsentStatus>> {
    let consent = deps.cookie_consent();
    let status = consent.status().await?;
    match &status {
        Some(status) if status.is_granted() => println!(
            "Cookies accepted{}",
            status
                .timestamp
                .map(|at| format!(" at {}", at.to_rfc3339()))
                .unwrap_or_default()
        ),
        _ => println!("No consent recorded"),
    }
    Ok(status)
}

pub async fn accept(deps: &AppDeps) -> anyhow::Result<ConsentStatus> {
    let status = deps.cookie_consent().accept(true, true).await?;
    println!("Consent saved");
    Ok(status)
}
