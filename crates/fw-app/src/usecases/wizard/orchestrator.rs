//! Wizard orchestrator.
//!
//! This module coordinates the wizard state machine and side effects.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use fw_core::ports::{ApiError, WizardEventPort};
use fw_core::wizard::{
    BackgroundPatch, WizardAction, WizardEvent, WizardState, WizardStateMachine, WizardStep,
};

use crate::usecases::wizard::context::WizardContext;
use crate::usecases::{LoadCredentialDocument, LoadSupporterBackground, SubmitSupporterBackground};

/// Route the UI is sent to after a successful submission.
pub const DEFAULT_AFTER_SUBMIT_ROUTE: &str = "/profile";

/// Errors produced by the wizard orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum WizardOrchestratorError {
    #[error("load background failed: {0}")]
    LoadBackground(#[from] ApiError),
}

/// Orchestrator that drives wizard state and side effects.
pub struct WizardOrchestrator {
    context: WizardContext,
    after_submit_route: String,

    load_background: Arc<LoadSupporterBackground>,
    submit_background: Arc<SubmitSupporterBackground>,
    load_document: Arc<LoadCredentialDocument>,
    event_port: Arc<dyn WizardEventPort>,
}

impl WizardOrchestrator {
    pub fn new(
        load_background: Arc<LoadSupporterBackground>,
        submit_background: Arc<SubmitSupporterBackground>,
        load_document: Arc<LoadCredentialDocument>,
        event_port: Arc<dyn WizardEventPort>,
    ) -> Self {
        Self {
            context: WizardContext::default(),
            after_submit_route: DEFAULT_AFTER_SUBMIT_ROUTE.to_string(),
            load_background,
            submit_background,
            load_document,
            event_port,
        }
    }

    pub fn with_after_submit_route(mut self, route: impl Into<String>) -> Self {
        self.after_submit_route = route.into();
        self
    }

    /// Current state. The first access of the session, whether a read or a
    /// dispatch, seeds it from the server record.
    pub async fn get_state(&self) -> WizardState {
        if !self.context.is_seeded() {
            let _dispatch_guard = self.context.lock_dispatch().await;
            self.seed_state_from_server().await;
        }
        self.context.snapshot().await
    }

    /// Re-fetches the server record and replaces the aggregate with it.
    pub async fn reload(&self) -> Result<WizardState, WizardOrchestratorError> {
        let _dispatch_guard = self.context.lock_dispatch().await;
        self.context.claim_seed();
        match self.load_background.execute().await? {
            Some(record) => Ok(self
                .apply_locked(WizardEvent::LoadInitialData { record })
                .await),
            None => Ok(self.context.snapshot().await),
        }
    }

    pub async fn update_form_data(&self, patch: BackgroundPatch) -> WizardState {
        self.dispatch(WizardEvent::UpdateFormData { patch }).await
    }

    pub async fn complete_step(&self, step: WizardStep, patch: BackgroundPatch) -> WizardState {
        self.dispatch(WizardEvent::CompleteStep { step, patch }).await
    }

    pub async fn mark_step_complete(&self, step: WizardStep) -> WizardState {
        self.dispatch(WizardEvent::MarkStepComplete { step }).await
    }

    pub async fn select_step(&self, step: WizardStep) -> WizardState {
        self.dispatch(WizardEvent::SelectStep { step }).await
    }

    pub async fn can_access_step(&self, step: WizardStep) -> bool {
        self.get_state().await.can_access_step(step)
    }

    pub async fn reset(&self) -> WizardState {
        self.dispatch(WizardEvent::Reset).await
    }

    pub async fn request_edit(&self) -> WizardState {
        self.dispatch(WizardEvent::RequestEdit).await
    }

    pub async fn cancel_edit(&self) -> WizardState {
        self.dispatch(WizardEvent::CancelEdit).await
    }

    pub async fn submit(&self) -> WizardState {
        self.dispatch(WizardEvent::Submit).await
    }

    /// Encodes the file at `path` and attaches it to credential `index`.
    ///
    /// A failed read is logged and leaves the wizard untouched.
    pub async fn attach_credential_document(&self, index: usize, path: &Path) -> WizardState {
        let event = match self.load_document.execute(path).await {
            Ok(document) => WizardEvent::CredentialDocumentAttached { index, document },
            Err(err) => WizardEvent::CredentialUploadFailed {
                index,
                reason: format!("{err:#}"),
            },
        };
        self.dispatch(event).await
    }

    pub async fn dispatch(&self, event: WizardEvent) -> WizardState {
        let _dispatch_guard = self.context.lock_dispatch().await;
        self.seed_state_from_server().await;
        self.apply_locked(event).await
    }

    /// Runs `event` and its follow-ups. Caller must hold the dispatch lock.
    async fn apply_locked(&self, event: WizardEvent) -> WizardState {
        let span = info_span!("usecase.wizard_orchestrator.dispatch", event = event.name());
        async {
            let mut current = self.context.snapshot().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let (from_step, from_mode) = (current.selected, current.mode);
                let event_name = event.name();
                let (next, actions) = WizardStateMachine::transition(current, event);
                info!(
                    event = event_name,
                    from_step = %from_step,
                    to_step = %next.selected,
                    from_mode = ?from_mode,
                    to_mode = ?next.mode,
                    completed = next.completed.len(),
                    "wizard state transition"
                );
                if let Some(err) = &next.error {
                    debug!(error = %err, "wizard transition recorded an error");
                }
                let follow_up_events = self.execute_actions(actions).await;
                self.set_state_and_emit(next.clone()).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) -> Vec<WizardEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            match action {
                WizardAction::SubmitBackground { form } => {
                    debug!("wizard executing action SubmitBackground");
                    match self.submit_background.execute(&form).await {
                        Ok(()) => follow_up_events.push(WizardEvent::SubmissionSucceeded),
                        Err(err) => {
                            error!(error = %err, "supporter background submission failed");
                            follow_up_events.push(WizardEvent::SubmissionFailed {
                                message: err.user_message(),
                            });
                        }
                    }
                }
                WizardAction::NavigateAfterSubmit => {
                    debug!(route = %self.after_submit_route, "wizard executing action NavigateAfterSubmit");
                    self.event_port
                        .emit_navigation(self.after_submit_route.clone())
                        .await;
                }
                WizardAction::NotifySubmissionFailed { message } => {
                    debug!("wizard executing action NotifySubmissionFailed");
                    self.event_port.emit_submission_failed(message).await;
                }
                WizardAction::LogUploadFailure { index, reason } => {
                    warn!(index, reason = %reason, "credential document upload failed");
                }
            }
        }
        follow_up_events
    }

    async fn set_state_and_emit(&self, state: WizardState) {
        self.context.replace(state.clone()).await;
        self.event_port.emit_wizard_state_changed(state).await;
    }

    /// One-shot seed. Caller must hold the dispatch lock.
    async fn seed_state_from_server(&self) {
        if !self.context.claim_seed() {
            return;
        }

        match self.load_background.execute().await {
            Ok(Some(record)) => {
                self.apply_locked(WizardEvent::LoadInitialData { record })
                    .await;
            }
            Ok(None) => {
                debug!("no background record, starting fresh wizard");
            }
            Err(err) => {
                error!(error = %err, "failed to load supporter background");
            }
        }
    }
}
