//! CLI command handlers.
//!
//! Each handler takes the wired dependencies, runs one use case flow and
//! prints a human-readable result on stdout.

pub mod admin;
pub mod check;
pub mod consent;
pub mod content;
pub mod register;
