//! Credential document encoding.
//!
//! Credential uploads travel inline with the background record as base64
//! data URLs; there is no separate multipart upload.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// A `data:<mime>;base64,<payload>` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUrl(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataUrlError {
    #[error("missing data: prefix")]
    MissingPrefix,
    #[error("only base64 data URLs are supported")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    InvalidPayload(String),
}

impl DataUrl {
    pub fn encode(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime_type};base64,{}", STANDARD.encode(bytes)))
    }

    /// Splits the URL back into its MIME type and raw bytes.
    pub fn decode(&self) -> Result<(String, Vec<u8>), DataUrlError> {
        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or(DataUrlError::MissingPrefix)?;
        let (meta, payload) = rest.split_once(',').ok_or(DataUrlError::NotBase64)?;
        let mime_type = meta
            .strip_suffix(";base64")
            .ok_or(DataUrlError::NotBase64)?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| DataUrlError::InvalidPayload(e.to_string()))?;
        Ok((mime_type.to_string(), bytes))
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(mime, _)| mime)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A document attached to a credential entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDocument {
    pub file_name: String,
    pub data_url: DataUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_base64_data_url() {
        let url = DataUrl::encode("application/pdf", b"%PDF-1.4");
        assert_eq!(url.as_str(), "data:application/pdf;base64,JVBERi0xLjQ=");
        assert_eq!(url.mime_type(), Some("application/pdf"));
    }

    #[test]
    fn decode_recovers_mime_and_bytes() {
        let url = DataUrl::encode("image/png", &[0x89, b'P', b'N', b'G']);
        let (mime, bytes) = url.decode().unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn decode_rejects_non_base64_urls() {
        let url: DataUrl = serde_json::from_str("\"data:text/plain,hello\"").unwrap();
        assert_eq!(url.decode(), Err(DataUrlError::NotBase64));

        let url: DataUrl = serde_json::from_str("\"https://example.org/a.pdf\"").unwrap();
        assert_eq!(url.decode(), Err(DataUrlError::MissingPrefix));
    }
}
