//! Application runtime.
//!
//! Holds the wired ports and the shared wizard orchestrator, and hands out
//! use cases through [`AppRuntime::usecases`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use fw_app::usecases::{
    LoadCredentialDocument, LoadSupporterBackground, SubmitSupporterBackground, WizardOrchestrator,
};
use fw_core::config::AppConfig;
use fw_core::ports::{BackgroundApiPort, CredentialDocumentPort, WizardEventPort};
use fw_infra::{FsCredentialDocumentLoader, HttpBackgroundApi, HttpBackgroundApiConfig};
use tokio::sync::mpsc;
use tracing::info;

use crate::adapters::{ChannelWizardEventPort, WizardUiEvent};

pub const UI_EVENT_BUFFER: usize = 64;

/// Ports the runtime is built from.
#[derive(Clone)]
pub struct AppDeps {
    pub background_api: Arc<dyn BackgroundApiPort>,
    pub documents: Arc<dyn CredentialDocumentPort>,
    pub wizard_events: Arc<dyn WizardEventPort>,
}

pub struct AppRuntime {
    pub deps: AppDeps,
    /// Shared across commands so the in-memory wizard state survives between
    /// calls.
    wizard_orchestrator: Arc<WizardOrchestrator>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        let wizard_orchestrator = Arc::new(WizardOrchestrator::new(
            Arc::new(LoadSupporterBackground::new(deps.background_api.clone())),
            Arc::new(SubmitSupporterBackground::new(deps.background_api.clone())),
            Arc::new(LoadCredentialDocument::new(deps.documents.clone())),
            deps.wizard_events.clone(),
        ));
        Self {
            deps,
            wizard_orchestrator,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Build the production runtime from resolved configuration.
///
/// Returns the receiving end of the UI event channel alongside it.
pub fn create_runtime(
    config: &AppConfig,
) -> anyhow::Result<(AppRuntime, mpsc::Receiver<WizardUiEvent>)> {
    if config.api_base_url.trim().is_empty() {
        anyhow::bail!("API base URL is not configured");
    }

    let background_api = HttpBackgroundApi::new(HttpBackgroundApiConfig {
        base_url: config.api_base_url.clone(),
        token: Some(config.api_token.clone()),
        timeout: Duration::from_secs(config.request_timeout_secs),
    })
    .context("Failed to build background API client")?;
    info!(endpoint = background_api.endpoint(), "background API client ready");

    let (event_port, rx) = ChannelWizardEventPort::channel(UI_EVENT_BUFFER);
    let deps = AppDeps {
        background_api: Arc::new(background_api),
        documents: Arc::new(FsCredentialDocumentLoader::new()),
        wizard_events: Arc::new(event_port),
    };
    Ok((AppRuntime::new(deps), rx))
}

/// Use case accessor for [`AppRuntime`].
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn wizard_orchestrator(&self) -> Arc<WizardOrchestrator> {
        self.runtime.wizard_orchestrator.clone()
    }

    pub fn load_supporter_background(&self) -> LoadSupporterBackground {
        LoadSupporterBackground::new(self.runtime.deps.background_api.clone())
    }

    pub fn load_credential_document(&self) -> LoadCredentialDocument {
        LoadCredentialDocument::new(self.runtime.deps.documents.clone())
    }
}
