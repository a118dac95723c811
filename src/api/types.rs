//! Payload types exchanged with the backend

use bytes::Bytes;
use serde::Deserialize;
use std::io;
use std::path::Path;

/// A preset record. The backend owns its schema, the client passes it through.
pub type Preset = serde_json::Value;

/// Success body of `POST /upload`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub download_url: String,
}

/// A named binary blob to upload
#[derive(Debug, Clone)]
pub struct FilePayload {
    name: String,
    data: Bytes,
    mime_type: Option<String>,
}

impl FilePayload {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a file from disk, named after the path's last component
    pub async fn from_path(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid file name: {}", path.display()),
                )
            })?
            .to_string();

        let data = tokio::fs::read(path).await?;
        Ok(Self::new(name, data))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn upload_response_reads_camel_case_and_ignores_extra_fields() {
        let body = r#"{"downloadUrl":"/f/abc123","size":42}"#;
        let parsed: UploadResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.download_url, "/f/abc123");
    }

    #[tokio::test]
    async fn from_path_uses_file_name_and_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crop.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"\x89PNG")
            .unwrap();

        let payload = FilePayload::from_path(&path).await.unwrap();
        assert_eq!(payload.name(), "crop.png");
        assert_eq!(payload.data().as_ref(), b"\x89PNG");
        assert_eq!(payload.mime_type(), None);
        assert_eq!(payload.len(), 4);
        assert!(!payload.is_empty());
    }

    #[test]
    fn empty_payload_is_still_a_payload() {
        let payload = FilePayload::new("empty.txt", Vec::new()).with_mime_type("text/plain");
        assert!(payload.is_empty());
        assert_eq!(payload.mime_type(), Some("text/plain"));
    }

    #[tokio::test]
    async fn from_path_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FilePayload::from_path(&dir.path().join("missing.bin"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
