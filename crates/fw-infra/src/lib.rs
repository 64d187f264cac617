pub mod api;
pub mod documents;

pub use api::{HttpBackgroundApi, HttpBackgroundApiConfig};
pub use documents::FsCredentialDocumentLoader;
