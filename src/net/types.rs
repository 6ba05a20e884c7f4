//! Wire types shared with the augmentation backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON keys exactly. Optional and
//! informational keys default when absent so older backends still parse, and
//! unknown keys are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// CATALOG
// =============================================================================

/// One augmentation option offered by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentationDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// =============================================================================
// TASKS
// =============================================================================

/// A user-created batch of uploaded images and its augmentation history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task_id")]
    pub id: String,
    pub name: String,
    pub image_count: u64,
    pub label_format: String,
    pub created_at: String,
    /// Runs in backend order (newest first).
    #[serde(default)]
    pub augmentations: Vec<AugmentationRun>,
}

/// One application of an augmentation set to a task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentationRun {
    /// Backend row id; absent on single-task lookups.
    #[serde(default)]
    pub id: Option<i64>,
    pub output_id: String,
    #[serde(default)]
    pub augmentations: Vec<String>,
    pub output_count: u64,
    pub created_at: String,
}

// =============================================================================
// UPLOAD
// =============================================================================

/// A file selected for upload, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { file_name: file_name.into(), bytes: bytes.into() }
    }
}

/// Multipart payload for `POST /api/upload`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadForm {
    pub task_name: String,
    pub label_format: String,
    pub images: Vec<UploadFile>,
    pub labels: Vec<UploadFile>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub task_id: String,
    #[serde(default)]
    pub uploaded_images: Vec<String>,
    #[serde(default)]
    pub uploaded_labels: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// PREVIEW / AUGMENT
// =============================================================================

/// JSON body for both `/api/preview/{id}` and `/api/augment/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentRequest {
    pub augmentations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub original_image: String,
    pub original_bbox_count: u64,
    #[serde(default)]
    pub augmented_images: Vec<AugmentedPreview>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentedPreview {
    #[serde(default)]
    pub augmentation_id: Option<String>,
    pub augmentation_name: String,
    pub image_path: String,
    pub bbox_count: u64,
}

/// Result of applying augmentations to every image of a task.
///
/// Counts are displayed as received; the client never recomputes them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentResponse {
    pub output_id: String,
    pub original_count: u64,
    pub augmented_count: u64,
    pub total_count: u64,
    pub processed_count: u64,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// MISC
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body carried by non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
