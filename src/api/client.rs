//! Client handle and the response plumbing shared by all operations

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Stateless client for the file-storage backend.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection
/// pool, so one instance can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) http: Client,
    pub(crate) config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Use a preconfigured HTTP client (proxies, TLS roots, timeouts)
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

/// Turn a non-2xx response into `ApiError::Backend`, keeping its body
pub(crate) async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let payload = response.text().await.unwrap_or_default();
    Err(ApiError::Backend { status, payload })
}

/// Parse a JSON body. An empty body reads as `null`.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response.bytes().await?;
    if body.is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_slice(&body)?)
}

pub(crate) fn log_failure(operation: &str, err: &ApiError) {
    log::error!("{} failed: {}", operation, err.detail());
}
