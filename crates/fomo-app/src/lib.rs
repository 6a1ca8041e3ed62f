//! FOMO application layer
//!
//! Use cases orchestrating the domain in `fomo-core` through its ports:
//! the wallet registration flow, site content loading and editing, the admin
//! session, cookie consent, analytics tracking and the analytics report.

pub mod usecases;

pub use usecases::{
    AdminLogin, AnalyticsReport, CookieConsent, LoadSiteContent, ManageCollection, ManageRoadmap, ManageSettings,
    RegistrationFlowError, RegistrationOrchestrator, RegistrationSettings, TrackEvent,
    VerifyAdminSession,
};
