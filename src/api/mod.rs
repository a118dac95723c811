//! Backend API client
//!
//! This module is organized into submodules:
//! - `client`: The client handle and shared response handling
//! - `types`: Payload types
//! - `upload`: File upload
//! - `download`: File retrieval and save-to-disk
//! - `presets`: Preset persistence

mod client;
mod download;
mod presets;
mod types;
mod upload;

pub use client::ApiClient;
pub use types::{FilePayload, Preset, UploadResponse};
pub use upload::UPLOAD_FIELD;
