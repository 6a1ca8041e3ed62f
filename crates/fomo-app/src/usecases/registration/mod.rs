//! Wallet registration use cases.
//!
//! This module exposes the registration orchestrator.

mod context;
pub mod orchestrator;

pub use orchestrator::{RegistrationFlowError, RegistrationOrchestrator, RegistrationSettings};
