//! Wizard state machine.
//!
//! Defines the explicitly constructed wizard state and a pure transition
//! function. Side effects (submission, navigation, notifications) are
//! returned as actions for the caller to execute.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::document::CredentialDocument;
use crate::wizard::access::{can_access_step, missing_required_before};
use crate::wizard::completion::{infer_completed_steps, CompletedSteps};
use crate::wizard::error::WizardError;
use crate::wizard::form_data::{BackgroundFormData, BackgroundPatch, BackgroundRecord};
use crate::wizard::mode::{ModeController, ModeEvent, PageMode};
use crate::wizard::step::WizardStep;
use crate::wizard::validation::validate_step;

/// State of one wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub form: BackgroundFormData,
    pub completed: CompletedSteps,
    pub selected: WizardStep,
    pub mode: PageMode,
    pub error: Option<WizardError>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(PageMode::Setup)
    }
}

impl WizardState {
    pub fn new(mode: PageMode) -> Self {
        Self {
            form: BackgroundFormData::default(),
            completed: CompletedSteps::new(),
            selected: WizardStep::first(),
            mode,
            error: None,
        }
    }

    /// Shallow-merges `patch` into the aggregate. No validation.
    pub fn update_form_data(&mut self, patch: BackgroundPatch) {
        self.form.merge(patch);
    }

    /// Replaces the aggregate wholesale and re-seeds completion from it.
    pub fn load_initial_data(&mut self, form: BackgroundFormData) {
        self.completed = infer_completed_steps(&form);
        self.form = form;
    }

    /// Back to the documented empty shape on the first step. Mode is kept.
    pub fn reset(&mut self) {
        self.form = BackgroundFormData::default();
        self.completed.clear();
        self.selected = WizardStep::first();
        self.error = None;
    }

    /// Marks `step` complete and advances to the next step in the fixed
    /// order, if any. Returns the selected step afterwards.
    pub fn mark_step_complete(&mut self, step: WizardStep) -> WizardStep {
        self.completed.insert(step);
        if let Some(next) = step.next() {
            self.selected = next;
        }
        self.selected
    }

    pub fn can_access_step(&self, step: WizardStep) -> bool {
        can_access_step(step, self.mode.gate_mode(), &self.completed)
    }

    pub fn select_step(&mut self, step: WizardStep) -> Result<(), WizardError> {
        if !self.can_access_step(step) {
            return Err(WizardError::StepLocked {
                step,
                missing: missing_required_before(step, &self.completed),
            });
        }
        self.selected = step;
        Ok(())
    }

    pub fn ready_to_submit(&self) -> bool {
        self.completed.all_required_complete()
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// Step-local edit, merged without validation.
    UpdateFormData { patch: BackgroundPatch },
    /// Record fetched from the server (edit / review).
    LoadInitialData { record: BackgroundRecord },
    /// Explicit wizard reset.
    Reset,
    /// Step form submitted: merge, validate, then mark complete.
    CompleteStep {
        step: WizardStep,
        patch: BackgroundPatch,
    },
    /// Mark a step complete without validation.
    MarkStepComplete { step: WizardStep },
    /// User navigates to a tab.
    SelectStep { step: WizardStep },
    RequestEdit,
    CancelEdit,
    /// Submit the whole aggregate.
    Submit,
    SubmissionSucceeded,
    SubmissionFailed { message: String },
    CredentialDocumentAttached {
        index: usize,
        document: CredentialDocument,
    },
    CredentialUploadFailed { index: usize, reason: String },
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::UpdateFormData { .. } => "update_form_data",
            WizardEvent::LoadInitialData { .. } => "load_initial_data",
            WizardEvent::Reset => "reset",
            WizardEvent::CompleteStep { .. } => "complete_step",
            WizardEvent::MarkStepComplete { .. } => "mark_step_complete",
            WizardEvent::SelectStep { .. } => "select_step",
            WizardEvent::RequestEdit => "request_edit",
            WizardEvent::CancelEdit => "cancel_edit",
            WizardEvent::Submit => "submit",
            WizardEvent::SubmissionSucceeded => "submission_succeeded",
            WizardEvent::SubmissionFailed { .. } => "submission_failed",
            WizardEvent::CredentialDocumentAttached { .. } => "credential_document_attached",
            WizardEvent::CredentialUploadFailed { .. } => "credential_upload_failed",
        }
    }

    fn mutates_record(&self) -> bool {
        matches!(
            self,
            WizardEvent::UpdateFormData { .. }
                | WizardEvent::Reset
                | WizardEvent::CompleteStep { .. }
                | WizardEvent::MarkStepComplete { .. }
                | WizardEvent::Submit
                | WizardEvent::CredentialDocumentAttached { .. }
        )
    }
}

/// Side effects produced by transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Send the full aggregate to the backend.
    SubmitBackground { form: BackgroundFormData },
    /// Leave the wizard after a successful submission.
    NavigateAfterSubmit,
    /// Surface a submission failure to the user.
    NotifySubmissionFailed { message: String },
    /// Record a failed credential upload; there is no user-facing recovery.
    LogUploadFailure { index: usize, reason: String },
}

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(mut state: WizardState, event: WizardEvent) -> (WizardState, Vec<WizardAction>) {
        if state.mode.is_read_only() && event.mutates_record() {
            warn!(mode = ?state.mode, event = event.name(), "wizard edit rejected in read-only mode");
            state.error = Some(WizardError::ReadOnly { mode: state.mode });
            return (state, Vec::new());
        }

        match event {
            WizardEvent::UpdateFormData { patch } => {
                state.update_form_data(patch);
                (state, Vec::new())
            }
            WizardEvent::LoadInitialData { record } => {
                state.mode = ModeController::transition(
                    state.mode,
                    ModeEvent::ServerStatusLoaded {
                        status: record.status,
                    },
                );
                state.load_initial_data(record.form);
                state.selected = WizardStep::first();
                state.error = None;
                (state, Vec::new())
            }
            WizardEvent::Reset => {
                state.reset();
                (state, Vec::new())
            }
            WizardEvent::CompleteStep { step, patch } => {
                if let Err(err) = state.select_step(step) {
                    state.error = Some(err);
                    return (state, Vec::new());
                }
                state.update_form_data(patch);
                let errors = validate_step(step, &state.form);
                if errors.is_empty() {
                    state.mark_step_complete(step);
                    state.error = None;
                } else {
                    state.error = Some(WizardError::Validation { step, errors });
                }
                (state, Vec::new())
            }
            WizardEvent::MarkStepComplete { step } => {
                state.mark_step_complete(step);
                (state, Vec::new())
            }
            WizardEvent::SelectStep { step } => {
                state.error = state.select_step(step).err();
                (state, Vec::new())
            }
            WizardEvent::RequestEdit => {
                Self::apply_mode_event(&mut state, ModeEvent::RequestEdit);
                (state, Vec::new())
            }
            WizardEvent::CancelEdit => {
                Self::apply_mode_event(&mut state, ModeEvent::CancelEdit);
                (state, Vec::new())
            }
            WizardEvent::Submit => {
                let missing = state.completed.missing_required();
                if !missing.is_empty() {
                    state.error = Some(WizardError::IncompleteRequiredSteps { missing });
                    return (state, Vec::new());
                }
                state.selected = WizardStep::Review;
                let errors = validate_step(WizardStep::Review, &state.form);
                if !errors.is_empty() {
                    state.error = Some(WizardError::Validation {
                        step: WizardStep::Review,
                        errors,
                    });
                    return (state, Vec::new());
                }
                state.error = None;
                let form = state.form.clone();
                (state, vec![WizardAction::SubmitBackground { form }])
            }
            WizardEvent::SubmissionSucceeded => {
                state.completed.insert(WizardStep::Review);
                state.mode = ModeController::transition(state.mode, ModeEvent::Submitted);
                state.error = None;
                (state, vec![WizardAction::NavigateAfterSubmit])
            }
            WizardEvent::SubmissionFailed { message } => {
                state.error = Some(WizardError::Submission {
                    message: message.clone(),
                });
                (state, vec![WizardAction::NotifySubmissionFailed { message }])
            }
            WizardEvent::CredentialDocumentAttached { index, document } => {
                match state.form.credentials.get_mut(index) {
                    Some(entry) => {
                        entry.document = Some(document);
                        state.error = None;
                    }
                    None => {
                        state.error = Some(WizardError::CredentialIndexOutOfRange { index });
                    }
                }
                (state, Vec::new())
            }
            WizardEvent::CredentialUploadFailed { index, reason } => {
                (state, vec![WizardAction::LogUploadFailure { index, reason }])
            }
        }
    }

    fn apply_mode_event(state: &mut WizardState, event: ModeEvent) {
        let next = ModeController::transition(state.mode, event);
        if next != state.mode {
            state.mode = next;
            state.selected = WizardStep::first();
            state.error = None;
        }
    }
}
