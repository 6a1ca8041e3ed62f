//! # Dependency Injection
//!
//! The only place that depends on `fomo-infra` and `fomo-app` together.
//! It assembles adapters behind their ports; it makes no decisions.

use std::sync::Arc;
use std::time::Duration;

use fomo_app::usecases::SiteContentSources;
use fomo_app::{
    AdminLogin, AnalyticsReport, CookieConsent, LoadSiteContent, ManageCollection,
    ManageSettings, RegistrationOrchestrator, RegistrationSettings, TrackEvent,
    VerifyAdminSession,
};
use fomo_core::config::AppConfig;
use fomo_core::content::{
    CollectionResource, CommunitySettings, DrawerCard, FaqItem, FooterSettings, HeroSettings,
    Partner, PlatformSettings, SettingsDocument, TeamMember,
};
use fomo_core::ports::*;
use fomo_core::registration::RegistrationState;
use fomo_core::wallet::WalletAddress;
use fomo_infra::http::{
    HttpAdminAuth, HttpAnalytics, HttpCollection, HttpRegistrationApi, HttpRoadmap, HttpSettings,
};
use fomo_infra::{
    ApiClient, FileConsentRepository, LocalWalletConnector, LogRedirect, PlaceholderSocialAuth,
    WatchRegistrationEvents,
};

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Everything the commands need, behind ports.
pub struct AppDeps {
    pub config: AppConfig,

    pub wallet: Arc<dyn WalletConnectorPort>,
    pub registration_api: Arc<dyn RegistrationApiPort>,
    pub social_auth: Arc<dyn SocialAuthPort>,
    pub redirect: Arc<LogRedirect>,
    pub registration_events: Arc<WatchRegistrationEvents>,

    pub admin_auth: Arc<dyn AdminAuthPort>,
    pub analytics: Arc<dyn AnalyticsPort>,
    pub analytics_report: Arc<dyn AnalyticsReportPort>,
    pub consent_store: Arc<dyn ConsentStatusPort>,
    pub clock: Arc<dyn ClockPort>,

    pub site_content: SiteContentSources,
    /// Backs the admin editors of collections outside the landing page load.
    pub api_client: ApiClient,
}

/// Build all adapters for `config`.
///
/// `wallet_address` is what the local wallet connector signs in with.
pub fn wire_dependencies(
    config: AppConfig,
    wallet_address: Option<WalletAddress>,
) -> WiringResult<AppDeps> {
    let timeout = Duration::from_secs(config.api_timeout_secs.max(1));
    let client = ApiClient::new(config.api_base_url.clone(), timeout)
        .map_err(|e| WiringError::HttpClientInit(format!("{e:#}")))?;

    let faq: Arc<dyn ContentCollectionPort<FaqItem>> =
        Arc::new(HttpCollection::<FaqItem>::new(client.clone()));
    let site_content = SiteContentSources {
        drawer_cards: Arc::new(HttpCollection::<DrawerCard>::new(client.clone())),
        team_members: Arc::new(HttpCollection::<TeamMember>::new(client.clone())),
        platform: Arc::new(HttpSettings::<PlatformSettings>::new(client.clone())),
        roadmap: Arc::new(HttpRoadmap::new(client.clone())),
        partners: Arc::new(HttpCollection::<Partner>::new(client.clone())),
        footer: Arc::new(HttpSettings::<FooterSettings>::new(client.clone())),
        faq,
        community: Arc::new(HttpSettings::<CommunitySettings>::new(client.clone())),
        hero: Arc::new(HttpSettings::<HeroSettings>::new(client.clone())),
    };

    let analytics = Arc::new(HttpAnalytics::new(client.clone()));

    Ok(AppDeps {
        wallet: Arc::new(LocalWalletConnector::new(wallet_address)),
        registration_api: Arc::new(HttpRegistrationApi::new(client.clone())),
        social_auth: Arc::new(PlaceholderSocialAuth::new(
            config.social_placeholder_handle.clone(),
        )),
        redirect: Arc::new(LogRedirect::new()),
        registration_events: Arc::new(WatchRegistrationEvents::new(RegistrationState::new())),
        admin_auth: Arc::new(HttpAdminAuth::new(client.clone())),
        analytics: analytics.clone(),
        analytics_report: analytics,
        consent_store: Arc::new(FileConsentRepository::with_defaults(config.data_dir.clone())),
        clock: Arc::new(SystemClock),
        site_content,
        api_client: client,
        config,
    })
}

impl AppDeps {
    pub fn registration(&self, referral_code: Option<String>) -> Arc<RegistrationOrchestrator> {
        let events: Arc<dyn RegistrationEventPort> = self.registration_events.clone();
        let redirect: Arc<dyn RedirectPort> = self.redirect.clone();
        Arc::new(RegistrationOrchestrator::new(
            RegistrationState::with_referral(referral_code),
            RegistrationSettings::from_config(&self.config),
            self.wallet.clone(),
            self.registration_api.clone(),
            self.social_auth.clone(),
            redirect,
            events,
        ))
    }

    pub fn load_site_content(&self) -> LoadSiteContent {
        LoadSiteContent::new(self.site_content.clone())
    }

    pub fn manage_faq(&self) -> ManageCollection<FaqItem> {
        ManageCollection::new(self.site_content.faq.clone())
    }

    /// Admin editor for any REST collection.
    pub fn manage<T: CollectionResource>(&self) -> ManageCollection<T> {
        ManageCollection::new(Arc::new(HttpCollection::<T>::new(self.api_client.clone())))
    }

    /// Admin editor for any settings document.
    pub fn manage_settings<T: SettingsDocument>(&self) -> ManageSettings<T> {
        ManageSettings::new(Arc::new(HttpSettings::<T>::new(self.api_client.clone())))
    }

    pub fn analytics_report(&self) -> AnalyticsReport {
        AnalyticsReport::new(self.analytics_report.clone())
    }

    pub fn admin_login(&self) -> AdminLogin {
        AdminLogin::new(self.admin_auth.clone())
    }

    pub fn verify_admin_session(&self) -> VerifyAdminSession {
        VerifyAdminSession::new(self.admin_auth.clone())
    }

    pub fn cookie_consent(&self) -> CookieConsent {
        CookieConsent::new(self.consent_store.clone(), self.clock.clone())
    }

    pub fn track_event(&self) -> TrackEvent {
        TrackEvent::new(self.analytics.clone())
    }
}
