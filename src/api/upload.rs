//! `POST /upload`

use super::client::{check_status, log_failure, read_json, ApiClient};
use super::types::{FilePayload, UploadResponse};
use crate::error::{ApiError, ApiResult};
use reqwest::multipart::{Form, Part};
use reqwest::Body;

/// Multipart field the backend reads the file from
pub const UPLOAD_FIELD: &str = "file";

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

impl ApiClient {
    /// Upload a file and return the backend's download URL for it.
    ///
    /// `None` is rejected with `ApiError::InvalidArgument` before any request
    /// is made.
    pub async fn upload_file(&self, file: Option<&FilePayload>) -> ApiResult<String> {
        let file = file.ok_or_else(|| ApiError::InvalidArgument("No file provided".to_string()))?;

        self.send_upload(file)
            .await
            .inspect_err(|e| log_failure("Upload", e))
    }

    async fn send_upload(&self, file: &FilePayload) -> ApiResult<String> {
        let url = self.url("/upload");
        log::debug!("POST {} ({} bytes, {})", url, file.len(), file.name());

        let part = Part::stream_with_length(Body::from(file.data().clone()), file.len() as u64)
            .file_name(file.name().to_string())
            .mime_str(file.mime_type().unwrap_or(DEFAULT_MIME_TYPE))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.http.post(&url).multipart(form).send().await?;
        let response = check_status(response).await?;
        let body: UploadResponse = read_json(response).await?;

        log::info!("Uploaded {} -> {}", file.name(), body.download_url);
        Ok(body.download_url)
    }
}
