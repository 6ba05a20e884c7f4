//! File naming helpers for uploads, previews, and downloaded archives.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use std::path::Path;

/// File name sent in a multipart part; falls back to the full path text.
pub fn upload_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Default archive name for an output, matching the backend's attachment name.
pub fn default_archive_name(output_id: &str) -> String {
    format!("augmented_{output_id}.zip")
}

/// Local file name for a preview image path such as `previews/rotate_x.jpg`.
pub fn preview_file_name(image_path: &str) -> &str {
    image_path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(image_path)
}
