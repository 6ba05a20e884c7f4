//! Upload flow: send a batch of images and labels as a new task.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use tracing::info;

use super::{Controller, FlowError, Validation};
use crate::net::api::AugmentApi;
use crate::net::types::{UploadFile, UploadForm, UploadResponse};
use crate::util::timefmt::{local_now, task_stamp};

/// Form contents collected by the front end.
#[derive(Clone, Debug, Default)]
pub struct UploadInput {
    /// Blank or missing names fall back to a timestamped default.
    pub task_name: Option<String>,
    pub label_format: String,
    pub images: Vec<UploadFile>,
    pub labels: Vec<UploadFile>,
}

impl<A: AugmentApi> Controller<A> {
    /// Upload images and labels, then target the created task.
    ///
    /// # Errors
    ///
    /// Returns [`Validation::NoImages`] without contacting the backend when
    /// no image is attached, [`FlowError::Busy`] when another request is
    /// pending, or the request error.
    pub async fn upload(&mut self, input: UploadInput) -> Result<UploadResponse, FlowError> {
        if input.images.is_empty() {
            return Err(self.fail(Validation::NoImages.into(), ""));
        }

        let task_name = match input.task_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.messages.default_task_name(&task_stamp(local_now())),
        };
        let form = UploadForm {
            task_name,
            label_format: input.label_format,
            images: input.images,
            labels: input.labels,
        };

        let fallback = self.messages.upload_failed();
        let guard = self.begin()?;
        info!(
            task_name = %form.task_name,
            label_format = %form.label_format,
            images = form.images.len(),
            labels = form.labels.len(),
            "upload: sending"
        );
        let result = self.api.upload(form).await;
        drop(guard);

        match result {
            Ok(response) => {
                info!(task_id = %response.task_id, images = response.uploaded_images.len(), "upload: task created");
                self.session.target_task(response.task_id.clone());
                let message = self.messages.uploaded(response.uploaded_images.len());
                self.succeed(message);
                Ok(response)
            }
            Err(err) => Err(self.fail(err.into(), fallback)),
        }
    }
}
