pub mod file_loader;

pub use file_loader::{mime_type_for, DocumentLoadError, FsCredentialDocumentLoader, MAX_DOCUMENT_BYTES};
