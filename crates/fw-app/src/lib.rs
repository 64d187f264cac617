//! Fellowship Application Orchestration Layer
//!
//! This crate contains the wizard use cases and the orchestrator that runs
//! the pure wizard state machine against the ports.

pub mod usecases;

pub use usecases::{
    LoadCredentialDocument, LoadSupporterBackground, SubmitSupporterBackground,
    WizardOrchestrator, WizardOrchestratorError,
};
