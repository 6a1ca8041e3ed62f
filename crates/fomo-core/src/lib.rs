//! # fomo-core
//!
//! Core domain models and business logic for the FOMO site client.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the registration state machine, content records, configuration DTOs and the
//! port traits implemented by `fomo-infra`.

// Public module exports
pub mod admin;
pub mod analytics;
pub mod config;
pub mod consent;
pub mod content;
pub mod i18n;
pub mod ports;
pub mod registration;
pub mod wallet;

// Re-export commonly used types at the crate root
pub use admin::AdminSession;
pub use config::AppConfig;
pub use i18n::Language;
pub use registration::{
    InviteCode, RegistrationAction, RegistrationError, RegistrationEvent, RegistrationState,
    RegistrationStateMachine, RegistrationStep,
};
pub use wallet::{WalletAddress, WalletCheck};
