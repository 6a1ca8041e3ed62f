//! Registration domain module.
//!
//! This module defines the wallet registration (invite) flow state machine types.

pub mod action;
pub mod error;
pub mod event;
pub mod invite_code;
pub mod state;
pub mod state_machine;

pub use action::RegistrationAction;
pub use error::RegistrationError;
pub use event::RegistrationEvent;
pub use invite_code::{InviteCode, MAX_INVITE_CODE_LEN};
pub use state::{RegistrationState, RegistrationStep, StepProgress};
pub use state_machine::RegistrationStateMachine;
