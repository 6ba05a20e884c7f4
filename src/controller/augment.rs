//! Preview, apply, and re-augment flows.

#[cfg(test)]
#[path = "augment_test.rs"]
mod augment_test;

use tracing::info;

use super::{Controller, FlowError, Validation};
use crate::net::api::AugmentApi;
use crate::net::types::{AugmentResponse, PreviewResponse};

impl<A: AugmentApi> Controller<A> {
    /// Request one sample output per selected augmentation for the active task.
    ///
    /// # Errors
    ///
    /// Validation errors for an empty selection or missing task, [`FlowError::Busy`],
    /// or the request error.
    pub async fn preview(&mut self) -> Result<PreviewResponse, FlowError> {
        let (task_id, augmentations) = self.primary_target()?;

        let fallback = self.messages.preview_failed();
        let guard = self.begin()?;
        info!(%task_id, ?augmentations, "preview: sending");
        let result = self.api.preview(&task_id, &augmentations).await;
        drop(guard);

        match result {
            Ok(response) => {
                info!(%task_id, variants = response.augmented_images.len(), "preview: ready");
                self.session.show_preview(response.clone());
                let message = self.messages.preview_ready();
                self.succeed(message);
                Ok(response)
            }
            Err(err) => Err(self.fail(err.into(), fallback)),
        }
    }

    /// Apply the selected augmentations to every image of the active task.
    ///
    /// # Errors
    ///
    /// Same as [`Controller::preview`].
    pub async fn apply(&mut self) -> Result<AugmentResponse, FlowError> {
        let (task_id, augmentations) = self.primary_target()?;

        let fallback = self.messages.apply_failed();
        let guard = self.begin()?;
        info!(%task_id, ?augmentations, "apply: sending");
        let result = self.api.augment(&task_id, &augmentations).await;
        drop(guard);

        match result {
            Ok(response) => {
                info!(%task_id, output_id = %response.output_id, total = response.total_count, "apply: done");
                let message = self.messages.applied(response.total_count);
                self.session.show_results(response.clone());
                self.succeed(message);
                self.refresh_history().await;
                Ok(response)
            }
            Err(err) => Err(self.fail(err.into(), fallback)),
        }
    }

    /// Open the re-augment dialog for an existing task.
    pub fn open_reaugment(&mut self, task_id: impl Into<String>) {
        self.session.open_reaugment(task_id.into());
    }

    pub fn close_modal(&mut self) {
        self.session.close_modal();
    }

    /// Apply the dialog's selection to the dialog's task.
    ///
    /// The dialog closes before the request goes out. The result does not
    /// replace the upload tab's results panel.
    ///
    /// # Errors
    ///
    /// Validation errors for a closed dialog, an empty selection, or a dialog
    /// without a task, [`FlowError::Busy`], or the request error.
    pub async fn apply_reaugment(&mut self) -> Result<AugmentResponse, FlowError> {
        if !self.session.modal.open {
            return Err(self.fail(Validation::DialogClosed.into(), ""));
        }
        let augmentations = self.session.modal.selection.ordered(&self.session.catalog);
        let augmentations = self.require_selection(augmentations)?;
        let Some(task_id) = self.session.modal.task_id.clone() else {
            return Err(self.fail(Validation::NoActiveTask.into(), ""));
        };

        let fallback = self.messages.apply_failed();
        let guard = self.begin()?;
        self.session.close_modal();
        info!(%task_id, ?augmentations, "reaugment: sending");
        let result = self.api.augment(&task_id, &augmentations).await;
        drop(guard);

        match result {
            Ok(response) => {
                info!(%task_id, output_id = %response.output_id, processed = response.processed_count, "reaugment: done");
                let message = self.messages.reaugmented(response.processed_count);
                self.succeed(message);
                self.refresh_history().await;
                Ok(response)
            }
            Err(err) => Err(self.fail(err.into(), fallback)),
        }
    }

    /// Selected ids in catalog order plus the active task, selection checked first.
    fn primary_target(&mut self) -> Result<(String, Vec<String>), FlowError> {
        let augmentations = self.session.selection.ordered(&self.session.catalog);
        let augmentations = self.require_selection(augmentations)?;
        let Some(task_id) = self.session.current_task_id.clone() else {
            return Err(self.fail(Validation::NoActiveTask.into(), ""));
        };
        Ok((task_id, augmentations))
    }
}
