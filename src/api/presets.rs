//! `POST /setpreset` and `GET /getpreset`

use super::client::{check_status, log_failure, read_json, ApiClient};
use super::types::Preset;
use crate::error::ApiResult;
use serde_json::Value;

impl ApiClient {
    /// Store a batch of presets, returning the backend's JSON reply as-is
    pub async fn set_preset(&self, presets: &[Preset]) -> ApiResult<Value> {
        self.post_presets(presets)
            .await
            .inspect_err(|e| log_failure("Set preset", e))
    }

    /// Fetch every stored preset. Normally a JSON array, but not checked.
    pub async fn get_preset(&self) -> ApiResult<Value> {
        self.fetch_presets()
            .await
            .inspect_err(|e| log_failure("Get preset", e))
    }

    async fn post_presets(&self, presets: &[Preset]) -> ApiResult<Value> {
        let url = self.url("/setpreset");
        log::debug!("POST {} ({} presets)", url, presets.len());

        let response = self.http.post(&url).json(presets).send().await?;
        let response = check_status(response).await?;
        read_json(response).await
    }

    async fn fetch_presets(&self) -> ApiResult<Value> {
        let url = self.url("/getpreset");
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;
        read_json(response).await
    }
}
