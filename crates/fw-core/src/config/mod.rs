//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration data structures and the TOML → DTO mapping.
//!
//! This module contains data only: no validation, no default value
//! calculation. Defaults and environment overrides are applied by the
//! bootstrap layer.

pub mod app_config;

pub use app_config::AppConfig;
