//! Command facade
//!
//! Entry points a UI shell calls. Each command opens a `command.*` root span
//! and maps errors to `String`.

pub mod account;
pub mod error;
pub mod wizard;

pub use error::map_err;
