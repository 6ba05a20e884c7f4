//! Archive downloads and preview image bytes.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use tracing::info;

use super::{Controller, FlowError};
use crate::net::api::AugmentApi;

impl<A: AugmentApi> Controller<A> {
    /// Fetch the result archive for `output_id`.
    ///
    /// # Errors
    ///
    /// [`FlowError::Busy`] or the request error.
    pub async fn download(&mut self, output_id: &str) -> Result<Vec<u8>, FlowError> {
        let fallback = self.messages.download_failed();
        let guard = self.begin()?;
        info!(%output_id, "download: fetching");
        let result = self.api.download(output_id).await;
        drop(guard);

        match result {
            Ok(bytes) => {
                info!(%output_id, bytes = bytes.len(), "download: done");
                Ok(bytes)
            }
            Err(err) => Err(self.fail(err.into(), fallback)),
        }
    }

    /// Fetch one preview image by the path the backend reported.
    ///
    /// Image loads are passive and record no notice.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn preview_image(&self, image_path: &str) -> Result<Vec<u8>, FlowError> {
        Ok(self.api.preview_image(image_path).await?)
    }
}
