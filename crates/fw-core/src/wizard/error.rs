use serde::{Deserialize, Serialize};

use crate::wizard::mode::PageMode;
use crate::wizard::step::WizardStep;

/// Field-level validation failure reported inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Wizard error types.
///
/// Every variant is recoverable; the wizard state is never discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardError {
    #[error("step {step} has {} invalid field(s)", .errors.len())]
    Validation {
        step: WizardStep,
        errors: Vec<FieldError>,
    },
    #[error("step {step} is locked until required steps are complete")]
    StepLocked {
        step: WizardStep,
        missing: Vec<WizardStep>,
    },
    #[error("required steps are incomplete")]
    IncompleteRequiredSteps { missing: Vec<WizardStep> },
    #[error("wizard is read-only in {mode:?} mode")]
    ReadOnly { mode: PageMode },
    #[error("submission failed: {message}")]
    Submission { message: String },
    #[error("no credential entry at index {index}")]
    CredentialIndexOutOfRange { index: usize },
}
