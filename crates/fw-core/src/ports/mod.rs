//! Port interfaces for the application layer
//!
//! Ports define the contract between the wizard use cases and the
//! infrastructure that talks to the backend, the file system and the UI.
//! The core never performs I/O itself.

pub mod background_api;
pub mod credential_document;
pub mod errors;
pub mod wizard_event;

pub use background_api::BackgroundApiPort;
pub use credential_document::CredentialDocumentPort;
pub use errors::ApiError;
pub use wizard_event::WizardEventPort;
