pub mod admin;
pub mod analytics_report;
pub mod consent;
pub mod content;
pub mod registration;
pub mod track_event;

pub use admin::{AdminLogin, AdminLoginError, VerifyAdminSession};
pub use analytics_report::AnalyticsReport;
pub use consent::{CookieConsent, CookieConsentError};
pub use content::{
    ContentError, LoadSiteContent, ManageCollection, ManageRoadmap, ManageSettings, MoveDirection,
    SiteContentSources,
};
pub use registration::{RegistrationFlowError, RegistrationOrchestrator, RegistrationSettings};
pub use track_event::TrackEvent;
