//! # fw-core
//!
//! Core domain models and business rules for the Fellowship supporter
//! background wizard.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod document;
pub mod ids;
pub mod messaging;
pub mod password;
pub mod ports;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use document::{CredentialDocument, DataUrl};
pub use ids::{GroupId, UserId};
pub use wizard::{
    ApplicationStatus, BackgroundFormData, BackgroundPatch, BackgroundRecord, CompletedSteps,
    PageMode, WizardAction, WizardError, WizardEvent, WizardMode, WizardState,
    WizardStateMachine, WizardStep,
};
