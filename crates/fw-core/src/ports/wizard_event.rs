use crate::wizard::WizardState;

/// Outbound notifications for whatever renders the wizard.
#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_wizard_state_changed(&self, state: WizardState);

    /// A submission failed; show `message` once.
    async fn emit_submission_failed(&self, message: String);

    /// Leave the wizard for `route`.
    async fn emit_navigation(&self, route: String);
}
