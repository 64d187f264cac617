//! Fellowship supporter background wizard
//!
//! Bootstrap, adapters and the command facade on top of the `fw-*` crates.

pub mod adapters;
pub mod bootstrap;
pub mod commands;

pub use bootstrap::{AppDeps, AppRuntime};
