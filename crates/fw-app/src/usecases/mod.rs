pub mod load_background;
pub mod load_credential_document;
pub mod submit_background;
pub mod wizard;

pub use load_background::LoadSupporterBackground;
pub use load_credential_document::LoadCredentialDocument;
pub use submit_background::SubmitSupporterBackground;
pub use wizard::{WizardOrchestrator, WizardOrchestratorError, DEFAULT_AFTER_SUBMIT_ROUTE};
