//! Extpack library exports for testing.
//!
//! Exposes the packaging internals so integration tests can drive the
//! transform step without going through the CLI.

pub mod clean;
pub mod common;
pub mod config;
pub mod manifest;
pub mod pack;
pub mod preflight;
pub mod rules;
pub mod template;
