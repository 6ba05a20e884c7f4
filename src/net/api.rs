//! REST API client for the augmentation backend.
//!
//! DESIGN
//! ======
//! [`AugmentApi`] is the seam the controller talks through. [`HttpAugmentApi`]
//! is the real `reqwest` implementation; tests substitute a recording mock.
//! Status handling and body parsing live in pure helpers (`parse_response`,
//! `http_error`) so they can be tested without a server.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Http`] carrying the backend's `error`
//! text when present. Connection failures and undecodable success bodies are
//! transport-class errors; the UI shows a generic message for those.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::types::{
    AugmentRequest, AugmentResponse, AugmentationDefinition, DeleteResponse, ErrorBody, PreviewResponse, Task,
    UploadFile, UploadForm, UploadResponse,
};
use crate::config::ClientConfig;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend requests.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL cannot address API paths.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a complete response.
    #[error("request failed: {0}")]
    Transport(String),

    /// A success response body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Http { status: u16, message: Option<String> },
}

impl ApiError {
    /// Human-readable text supplied by the backend, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// `true` for failures outside the HTTP exchange itself.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Http { .. })
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// URL layout of the backend API under a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parse a base URL such as `http://127.0.0.1:222` or `https://host/prefix/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the URL is malformed or cannot
    /// carry path segments.
    pub fn parse(base: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base).map_err(|e| ApiError::InvalidBaseUrl(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base.to_string()));
        }
        Ok(Self { base })
    }

    fn join<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn augmentations(&self) -> Url {
        self.join(["api", "augmentations"])
    }

    pub fn upload(&self) -> Url {
        self.join(["api", "upload"])
    }

    pub fn preview(&self, task_id: &str) -> Url {
        self.join(["api", "preview", task_id])
    }

    pub fn augment(&self, task_id: &str) -> Url {
        self.join(["api", "augment", task_id])
    }

    pub fn tasks(&self) -> Url {
        self.join(["api", "tasks"])
    }

    pub fn task(&self, task_id: &str) -> Url {
        self.join(["api", "tasks", task_id])
    }

    /// Image source for a preview path; `/` separators inside `path` are kept.
    pub fn preview_image(&self, path: &str) -> Url {
        let segments = ["api", "preview-image"]
            .into_iter()
            .chain(path.split('/').filter(|s| !s.is_empty()));
        self.join(segments)
    }

    pub fn download(&self, output_id: &str) -> Url {
        self.join(["api", "download", output_id])
    }
}

// =============================================================================
// SEAM
// =============================================================================

/// Operations the UI controller needs from the backend.
#[async_trait]
pub trait AugmentApi: Send + Sync {
    /// URL layout used for image sources and download links.
    fn endpoints(&self) -> &Endpoints;

    async fn list_augmentations(&self) -> Result<Vec<AugmentationDefinition>, ApiError>;

    async fn upload(&self, form: UploadForm) -> Result<UploadResponse, ApiError>;

    async fn preview(&self, task_id: &str, augmentations: &[String]) -> Result<PreviewResponse, ApiError>;

    async fn augment(&self, task_id: &str, augmentations: &[String]) -> Result<AugmentResponse, ApiError>;

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    async fn delete_task(&self, task_id: &str) -> Result<DeleteResponse, ApiError>;

    async fn preview_image(&self, path: &str) -> Result<Vec<u8>, ApiError>;

    async fn download(&self, output_id: &str) -> Result<Vec<u8>, ApiError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpAugmentApi {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpAugmentApi {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let endpoints = Endpoints::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, endpoints })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport)?;
        debug!(status, bytes = text.len(), "backend response");
        parse_response(status, &text)
    }

    async fn send_bytes(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        if !is_success(status) {
            let text = response.text().await.map_err(transport)?;
            return Err(http_error(status, &text));
        }
        let bytes = response.bytes().await.map_err(transport)?;
        debug!(status, bytes = bytes.len(), "backend binary response");
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl AugmentApi for HttpAugmentApi {
    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn list_augmentations(&self) -> Result<Vec<AugmentationDefinition>, ApiError> {
        self.send_json(self.http.get(self.endpoints.augmentations())).await
    }

    async fn upload(&self, form: UploadForm) -> Result<UploadResponse, ApiError> {
        let request = self.http.post(self.endpoints.upload()).multipart(build_upload_form(form));
        self.send_json(request).await
    }

    async fn preview(&self, task_id: &str, augmentations: &[String]) -> Result<PreviewResponse, ApiError> {
        let body = AugmentRequest { augmentations: augmentations.to_vec() };
        self.send_json(self.http.post(self.endpoints.preview(task_id)).json(&body)).await
    }

    async fn augment(&self, task_id: &str, augmentations: &[String]) -> Result<AugmentResponse, ApiError> {
        let body = AugmentRequest { augmentations: augmentations.to_vec() };
        self.send_json(self.http.post(self.endpoints.augment(task_id)).json(&body)).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.send_json(self.http.get(self.endpoints.tasks())).await
    }

    async fn delete_task(&self, task_id: &str) -> Result<DeleteResponse, ApiError> {
        self.send_json(self.http.delete(self.endpoints.task(task_id))).await
    }

    async fn preview_image(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        self.send_bytes(self.http.get(self.endpoints.preview_image(path))).await
    }

    async fn download(&self, output_id: &str) -> Result<Vec<u8>, ApiError> {
        self.send_bytes(self.http.get(self.endpoints.download(output_id))).await
    }
}

// =============================================================================
// WIRE HELPERS
// =============================================================================

fn build_upload_form(form: UploadForm) -> Form {
    let mut multipart = Form::new()
        .text("task_name", form.task_name)
        .text("label_format", form.label_format);
    for image in form.images {
        multipart = multipart.part("images", file_part(image));
    }
    for label in form.labels {
        multipart = multipart.part("labels", file_part(label));
    }
    multipart
}

fn file_part(file: UploadFile) -> Part {
    Part::bytes(file.bytes).file_name(file.file_name)
}

fn transport(err: reqwest::Error) -> ApiError {
    warn!(error = %err, "backend request failed");
    ApiError::Transport(err.to_string())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(http_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn http_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());
    ApiError::Http { status, message }
}
