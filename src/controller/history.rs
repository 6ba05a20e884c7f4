//! Task history flows: listing and deletion.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use tracing::{debug, info};

use super::{Confirm, Controller, FlowError};
use crate::net::api::AugmentApi;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Declined,
}

impl<A: AugmentApi> Controller<A> {
    /// Replace the task list with the backend's current one.
    ///
    /// Runs without the loading indicator so it can follow a flow that still
    /// holds it.
    ///
    /// # Errors
    ///
    /// Returns the request error; the notice is always the generic history message.
    pub async fn load_history(&mut self) -> Result<(), FlowError> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "history loaded");
                self.session.replace_tasks(tasks);
                Ok(())
            }
            Err(err) => {
                let message = self.messages.history_failed();
                Err(self.fail_generic(err.into(), message))
            }
        }
    }

    /// Delete a task after the user confirms.
    ///
    /// # Errors
    ///
    /// [`FlowError::Busy`] or the request error. Declining is not an error.
    pub async fn delete_task(&mut self, task_id: &str, confirm: &dyn Confirm) -> Result<DeleteOutcome, FlowError> {
        if !confirm.confirm(self.messages.delete_confirm()) {
            debug!(%task_id, "delete: declined");
            return Ok(DeleteOutcome::Declined);
        }

        let fallback = self.messages.delete_failed();
        let guard = self.begin()?;
        info!(%task_id, "delete: sending");
        let result = self.api.delete_task(task_id).await;
        drop(guard);

        match result {
            Ok(_) => {
                info!(%task_id, "delete: done");
                let message = self.messages.deleted();
                self.succeed(message);
                self.refresh_history().await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => Err(self.fail(err.into(), fallback)),
        }
    }
}
