//! FOMO site client.
//!
//! Wires the `fomo-app` use cases to the `fomo-infra` adapters and exposes
//! them as CLI commands.

pub mod bootstrap;
pub mod commands;
