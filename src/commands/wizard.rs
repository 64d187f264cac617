//! Supporter background wizard commands

use std::path::PathBuf;

use fw_core::document::CredentialDocument;
use fw_core::wizard::{BackgroundPatch, BackgroundRecord, WizardState, WizardStep};
use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;

fn parse_step(step: &str) -> Result<WizardStep, String> {
    step.parse::<WizardStep>().map_err(|e| e.to_string())
}

/// Get current wizard state, seeding it from the server on first call.
pub async fn get_wizard_state(runtime: &AppRuntime) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.get_state");
    async { Ok(runtime.usecases().wizard_orchestrator().get_state().await) }
        .instrument(span)
        .await
}

pub async fn reload_wizard(runtime: &AppRuntime) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.reload");
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        orchestrator.reload().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}

/// Raw server record, bypassing the wizard.
pub async fn get_background_record(
    runtime: &AppRuntime,
) -> Result<Option<BackgroundRecord>, String> {
    let span = info_span!("command.wizard.get_background_record");
    async {
        let uc = runtime.usecases().load_supporter_background();
        uc.execute().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}

pub async fn update_form_data(
    runtime: &AppRuntime,
    patch: BackgroundPatch,
) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.update_form_data", keys = ?patch.keys());
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator.update_form_data(patch).await)
    }
    .instrument(span)
    .await
}

pub async fn complete_step(
    runtime: &AppRuntime,
    step: String,
    patch: BackgroundPatch,
) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.complete_step", step = %step);
    async {
        let step = parse_step(&step)?;
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator.complete_step(step, patch).await)
    }
    .instrument(span)
    .await
}

pub async fn mark_step_complete(runtime: &AppRuntime, step: String) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.mark_step_complete", step = %step);
    async {
        let step = parse_step(&step)?;
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator.mark_step_complete(step).await)
    }
    .instrument(span)
    .await
}

pub async fn select_step(runtime: &AppRuntime, step: String) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.select_step", step = %step);
    async {
        let step = parse_step(&step)?;
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator.select_step(step).await)
    }
    .instrument(span)
    .await
}

pub async fn can_access_step(runtime: &AppRuntime, step: String) -> Result<bool, String> {
    let step = parse_step(&step)?;
    Ok(runtime
        .usecases()
        .wizard_orchestrator()
        .can_access_step(step)
        .await)
}

pub async fn reset_wizard(runtime: &AppRuntime) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.reset");
    async { Ok(runtime.usecases().wizard_orchestrator().reset().await) }
        .instrument(span)
        .await
}

pub async fn request_edit(runtime: &AppRuntime) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.request_edit");
    async { Ok(runtime.usecases().wizard_orchestrator().request_edit().await) }
        .instrument(span)
        .await
}

pub async fn cancel_edit(runtime: &AppRuntime) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.cancel_edit");
    async { Ok(runtime.usecases().wizard_orchestrator().cancel_edit().await) }
        .instrument(span)
        .await
}

/// Submit the whole aggregate. Failures come back inside the state and as a
/// `SubmissionFailed` UI event, not as `Err`.
pub async fn submit_background(runtime: &AppRuntime) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.submit");
    async { Ok(runtime.usecases().wizard_orchestrator().submit().await) }
        .instrument(span)
        .await
}

pub async fn attach_credential_document(
    runtime: &AppRuntime,
    index: usize,
    path: String,
) -> Result<WizardState, String> {
    let span = info_span!("command.wizard.attach_credential_document", index);
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator
            .attach_credential_document(index, &PathBuf::from(path))
            .await)
    }
    .instrument(span)
    .await
}

/// Encode a document without attaching it, for previews.
pub async fn preview_credential_document(
    runtime: &AppRuntime,
    path: String,
) -> Result<CredentialDocument, String> {
    let span = info_span!("command.wizard.preview_credential_document");
    async {
        let uc = runtime.usecases().load_credential_document();
        uc.execute(&PathBuf::from(path)).await.map_err(map_err)
    }
    .instrument(span)
    .await
}
