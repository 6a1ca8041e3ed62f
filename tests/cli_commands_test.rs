//! Commands wired against a mock backend.

use mockito::{Matcher, Server};
use tempfile::TempDir;

use fomo_core::admin::AdminSession;
use fomo_core::analytics::AnalyticsPeriod;
use fomo_core::config::AppConfig;
use fomo_core::i18n::Language;
use fomo_core::registration::RegistrationStep;
use fomo_core::wallet::WalletAddress;
use fomo_lib::bootstrap::wire_dependencies;
use fomo_lib::commands::{self, admin::CollectionKind, register::RegisterArgs};

fn config_for(server: &Server, data_dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::with_system_defaults(data_dir.path().to_path_buf());
    config.api_base_url = server.url();
    config.celebration_delay_ms = 0;
    config
}

#[tokio::test]
async fn register_command_completes_flow_for_new_wallet() {
    let mut server = Server::new_async().await;
    let data_dir = TempDir::new().unwrap();
    let check = server
        .mock("GET", "/wallet/check/0xabc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"is_registered": false}"#)
        .create_async()
        .await;
    let register = server
        .mock("POST", "/wallet/register")
        .match_body(Matcher::Json(serde_json::json!({
            "wallet_address": "0xabc",
            "invite_code": "VIP001"
        })))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;
    let track = server
        .mock("POST", "/analytics/track")
        .match_body(Matcher::PartialJson(
            serde_json::json!({"event_type": "conversion"}),
        ))
        .with_status(200)
        .create_async()
        .await;

    let deps = wire_dependencies(
        config_for(&server, &data_dir),
        Some(WalletAddress::new("0xabc")),
    )
    .unwrap();

    let state = commands::register::run(
        &deps,
        RegisterArgs {
            invite_code: Some("vip001".into()),
            accept_terms: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    check.assert_async().await;
    register.assert_async().await;
    track.assert_async().await;
    assert_eq!(state.step, RegistrationStep::Completed);
    assert_eq!(state.invite_code, "VIP001");
    assert_eq!(
        deps.registration_events.subscribe().borrow().step,
        RegistrationStep::Completed
    );
    assert_eq!(deps.redirect.last_target().as_deref(), Some("/platform"));
}

#[tokio::test]
async fn register_command_reports_rejected_invite_code() {
    let mut server = Server::new_async().await;
    let data_dir = TempDir::new().unwrap();
    server
        .mock("GET", "/wallet/check/0xabc")
        .with_status(200)
        .with_body(r#"{"is_registered": false}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/wallet/register")
        .with_status(400)
        .with_body(r#"{"detail": "Invalid or already used invite code"}"#)
        .create_async()
        .await;

    let deps = wire_dependencies(
        config_for(&server, &data_dir),
        Some(WalletAddress::new("0xabc")),
    )
    .unwrap();

    let err = commands::register::run(
        &deps,
        RegisterArgs {
            invite_code: Some("USED01".into()),
            accept_terms: true,
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Invalid or already used invite code");
}

#[tokio::test]
async fn register_command_without_terms_stops_before_completion() {
    let mut server = Server::new_async().await;
    let data_dir = TempDir::new().unwrap();
    server
        .mock("GET", "/wallet/check/0xabc")
        .with_status(200)
        .with_body(r#"{"is_registered": false}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/wallet/register")
        .with_status(200)
        .create_async()
        .await;

    let deps = wire_dependencies(
        config_for(&server, &data_dir),
        Some(WalletAddress::new("0xabc")),
    )
    .unwrap();

    let err = commands::register::run(
        &deps,
        RegisterArgs {
            invite_code: Some("VIP001".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Please accept the Terms and Privacy Policy");
}

#[tokio::test]
async fn consent_accept_persists_under_data_dir() {
    let server = Server::new_async().await;
    let data_dir = TempDir::new().unwrap();
    let deps = wire_dependencies(config_for(&server, &data_dir), None).unwrap();

    assert_eq!(commands::consent::status(&deps).await.unwrap(), None);

    let accepted = commands::consent::accept(&deps).await.unwrap();

    assert!(accepted.is_granted());
    assert!(data_dir.path().join("cookie_consent.json").exists());
    assert_eq!(
        commands::consent::status(&deps).await.unwrap(),
        Some(accepted)
    );
}

#[tokio::test]
async fn admin_utilities_reorder_verifies_then_puts_order() {
    let mut server = Server::new_async().await;
    let data_dir = TempDir::new().unwrap();
    let verify = server
        .mock("POST", "/admin/verify")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"valid": true}"#)
        .create_async()
        .await;
    let reorder = server
        .mock("PUT", "/utilities/reorder")
        .match_header("authorization", "Bearer admin-token")
        .match_body(Matcher::Json(serde_json::json!([
            {"id": "signals", "order": 0},
            {"id": "arena", "order": 1}
        ])))
        .with_status(200)
        .with_body(r#"{"message": "Utilities reordered successfully"}"#)
        .create_async()
        .await;

    let deps = wire_dependencies(config_for(&server, &data_dir), None).unwrap();
    commands::admin::reorder_utilities(
        &deps,
        &AdminSession::new("admin-token"),
        &["signals".to_string(), "arena".to_string()],
    )
    .await
    .unwrap();

    verify.assert_async().await;
    reorder.assert_async().await;
}

#[tokio::test]
async fn admin_list_reads_evolution_levels() {
    let mut server = Server::new_async().await;
    let data_dir = TempDir::new().unwrap();
    server
        .mock("GET", "/evolution-levels")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id": "l2", "rank_en": "Trader", "fomo_score_min": 100, "fomo_score_max": 499, "order": 1},
                {"id": "l1", "rank_en": "Rookie", "rank_ru": "Новичок", "fomo_score_min": 0, "fomo_score_max": 99, "order": 0}]"#,
        )
        .create_async()
        .await;

    let deps = wire_dependencies(config_for(&server, &data_dir), None).unwrap();
    let rows = commands::admin::list_collection(&deps, CollectionKind::EvolutionLevels, Language::Ru)
        .await
        .unwrap();

    assert_eq!(rows, 2);
}

#[tokio::test]
async fn admin_analytics_stats_and_clear() {
    let mut server = Server::new_async().await;
    let data_dir = TempDir::new().unwrap();
    let stats = server
        .mock("GET", "/analytics/stats")
        .match_query(Matcher::UrlEncoded("period".into(), "90".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"page_views": 5, "unique_sessions": 2}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/admin/verify")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"valid": true}"#)
        .create_async()
        .await;
    let clear = server
        .mock("DELETE", "/analytics/clear")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "deleted_count": 5}"#)
        .create_async()
        .await;

    let deps = wire_dependencies(config_for(&server, &data_dir), None).unwrap();
    let session = AdminSession::new("admin-token");
    let loaded = commands::admin::analytics_stats(&deps, &session, AnalyticsPeriod::Quarter)
        .await
        .unwrap();
    let deleted = commands::admin::analytics_clear(&deps, &session).await.unwrap();

    stats.assert_async().await;
    clear.assert_async().await;
    assert_eq!(loaded.page_views, 5);
    assert_eq!(deleted, 5);
}
