use std::path::Path;

use async_trait::async_trait;

use crate::document::CredentialDocument;

#[async_trait]
pub trait CredentialDocumentPort: Send + Sync {
    /// Read a local file and encode it as a data URL document.
    async fn load_document(&self, path: &Path) -> anyhow::Result<CredentialDocument>;
}
