use std::path::Path;
use std::sync::Arc;

use fw_core::document::CredentialDocument;
use fw_core::ports::CredentialDocumentPort;
use tracing::{debug, info_span, Instrument};

/// Use case for turning a local file into a credential document.
pub struct LoadCredentialDocument {
    documents: Arc<dyn CredentialDocumentPort>,
}

impl LoadCredentialDocument {
    pub fn new(documents: Arc<dyn CredentialDocumentPort>) -> Self {
        Self { documents }
    }

    pub async fn execute(&self, path: &Path) -> anyhow::Result<CredentialDocument> {
        let span = info_span!("usecase.load_credential_document.execute", path = %path.display());
        async {
            let document = self.documents.load_document(path).await?;
            debug!(
                file_name = %document.file_name,
                mime = document.data_url.mime_type().unwrap_or("unknown"),
                "credential document encoded"
            );
            Ok(document)
        }
        .instrument(span)
        .await
    }
}
