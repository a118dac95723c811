//! `GET /download/{fileName}` and the save-to-disk convenience on top of it

use super::client::{check_status, log_failure, ApiClient};
use crate::error::ApiResult;
use crate::saver::FileSaver;
use bytes::Bytes;
use std::path::PathBuf;

impl ApiClient {
    /// Fetch a stored file as raw bytes
    pub async fn get_file(&self, file_name: &str) -> ApiResult<Bytes> {
        self.fetch_file(file_name)
            .await
            .inspect_err(|e| log_failure("Download", e))
    }

    async fn fetch_file(&self, file_name: &str) -> ApiResult<Bytes> {
        // The name goes in as given; the URL parser escapes only what a path can't hold
        let url = self.url(&format!("/download/{}", file_name));
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?)
    }

    /// Fetch a file and hand it to `saver` under its own name.
    ///
    /// Failures are logged and absorbed; `None` means nothing was saved.
    /// Use [`ApiClient::try_download_file`] to get the error instead.
    pub async fn download_file<S: FileSaver>(&self, file_name: &str, saver: &S) -> Option<PathBuf> {
        match self.try_download_file(file_name, saver).await {
            Ok(path) => Some(path),
            Err(e) => {
                log_failure("File download", &e);
                None
            }
        }
    }

    pub async fn try_download_file<S: FileSaver>(
        &self,
        file_name: &str,
        saver: &S,
    ) -> ApiResult<PathBuf> {
        let blob = self.get_file(file_name).await?;
        let path = saver.save(file_name, &blob).await?;
        log::info!("Saved {} ({} bytes) to {}", file_name, blob.len(), path.display());
        Ok(path)
    }
}
