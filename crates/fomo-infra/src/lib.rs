//! FOMO infrastructure layer
//!
//! Implementations of the `fomo-core` ports: REST adapters over `reqwest`,
//! the file-backed consent store and local stand-ins for the wallet SDK,
//! social auth and navigation.

pub mod app_dirs;
pub mod consent_store;
pub mod events;
pub mod http;
pub mod redirect;
pub mod social;
pub mod wallet;

pub use consent_store::FileConsentRepository;
pub use events::WatchRegistrationEvents;
pub use http::ApiClient;
pub use redirect::LogRedirect;
pub use social::PlaceholderSocialAuth;
pub use wallet::LocalWalletConnector;
