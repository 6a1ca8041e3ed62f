//! Port interfaces for the application layer.
//!
//! Use cases in `fomo-app` depend only on these traits. HTTP adapters,
//! the file-backed consent store and the wallet connector live in
//! `fomo-infra`.

pub mod admin_auth;
pub mod analytics;
pub mod clock;
pub mod consent;
pub mod content;
pub mod errors;
pub mod redirect;
pub mod registration_api;
pub mod registration_event;
pub mod social_auth;
pub mod wallet_connector;

pub use admin_auth::AdminAuthPort;
pub use analytics::{AnalyticsPort, AnalyticsReportPort};
pub use clock::{ClockPort, SystemClock};
pub use consent::ConsentStatusPort;
pub use content::{ContentCollectionPort, RoadmapPort, SettingsDocumentPort};
pub use errors::{ContentApiError, RegistrationApiError, WalletConnectorError};
pub use redirect::RedirectPort;
pub use registration_api::RegistrationApiPort;
pub use registration_event::RegistrationEventPort;
pub use social_auth::SocialAuthPort;
pub use wallet_connector::WalletConnectorPort;
