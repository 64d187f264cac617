//! File-based credential document loader
//!
//! Reads a local file and encodes it as a base64 data URL so it can travel
//! inline with the background record.

use std::path::Path;

use async_trait::async_trait;
use fw_core::document::{CredentialDocument, DataUrl};
use fw_core::ports::CredentialDocumentPort;
use tokio::fs;
use tracing::debug;

/// 10 MiB
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum DocumentLoadError {
    #[error("document {path} is {size} bytes, limit is {limit}")]
    DocumentTooLarge { path: String, size: u64, limit: u64 },

    #[error("document path has no file name: {0}")]
    MissingFileName(String),
}

pub struct FsCredentialDocumentLoader {
    max_bytes: u64,
}

impl FsCredentialDocumentLoader {
    pub fn new() -> Self {
        Self {
            max_bytes: MAX_DOCUMENT_BYTES,
        }
    }

    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl Default for FsCredentialDocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// MIME type guessed from the file extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl CredentialDocumentPort for FsCredentialDocumentLoader {
    async fn load_document(&self, path: &Path) -> anyhow::Result<CredentialDocument> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| DocumentLoadError::MissingFileName(path.display().to_string()))?
            .to_string();

        let metadata = fs::metadata(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to stat document {}: {e}", path.display()))?;
        if metadata.len() > self.max_bytes {
            return Err(DocumentLoadError::DocumentTooLarge {
                path: path.display().to_string(),
                size: metadata.len(),
                limit: self.max_bytes,
            }
            .into());
        }

        let bytes = fs::read(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read document {}: {e}", path.display()))?;
        let mime_type = mime_type_for(path);
        debug!(file_name = %file_name, mime = mime_type, size = bytes.len(), "read credential document");

        Ok(CredentialDocument {
            file_name,
            data_url: DataUrl::encode(mime_type, &bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn mime_type_follows_extension() {
        assert_eq!(mime_type_for(Path::new("a/license.PDF")), "application/pdf");
        assert_eq!(mime_type_for(Path::new("scan.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("scan.jpg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("card.webp")), "image/webp");
        assert_eq!(mime_type_for(Path::new("notes")), "application/octet-stream");
    }

    #[tokio::test]
    async fn loads_file_as_data_url() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("certificate.png");
        tokio::fs::write(&path, [0x89, b'P', b'N', b'G']).await?;

        let document = FsCredentialDocumentLoader::new().load_document(&path).await?;

        assert_eq!(document.file_name, "certificate.png");
        let (mime, bytes) = document.data_url.decode()?;
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_documents_over_the_limit() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("big.pdf");
        tokio::fs::write(&path, vec![0u8; 32]).await?;

        let err = FsCredentialDocumentLoader::with_max_bytes(16)
            .load_document(&path)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DocumentLoadError>(),
            Some(DocumentLoadError::DocumentTooLarge { size: 32, limit: 16, .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = FsCredentialDocumentLoader::new()
            .load_document(&temp_dir.path().join("gone.pdf"))
            .await;
        assert!(result.is_err());
    }
}
