//! Client for the cropper file-storage backend.
//!
//! Wraps five HTTP round trips against one base URL: uploading a file,
//! fetching or saving a stored file, and storing or fetching presets.

pub mod api;
pub mod config;
pub mod error;
pub mod saver;

pub use api::{ApiClient, FilePayload, Preset, UploadResponse};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use saver::{DirectorySaver, FileSaver};
