//! Supporter background wizard domain module.
//!
//! This module defines the step registry, the form aggregate and the pure
//! wizard state machine.

pub mod access;
pub mod completion;
pub mod error;
pub mod form_data;
pub mod mode;
pub mod state_machine;
pub mod step;
pub mod validation;

pub use access::{can_access_step, missing_required_before};
pub use completion::{infer_completed_steps, CompletedSteps};
pub use error::{FieldError, WizardError};
pub use form_data::{BackgroundFormData, BackgroundPatch, BackgroundRecord, CredentialEntry};
pub use mode::{ApplicationStatus, ModeController, ModeEvent, PageMode, WizardMode};
pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
pub use step::{StepDescriptor, UnknownStep, WizardStep, STEP_REGISTRY};
pub use validation::validate_step;
