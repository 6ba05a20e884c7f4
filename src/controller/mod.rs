//! UI controller: the context object every flow runs against.
//!
//! DESIGN
//! ======
//! [`Controller`] owns the backend seam, the session state, the shared loading
//! indicator, and the message catalog. Each user-facing flow is an async
//! method that validates, claims the indicator, issues exactly one request,
//! and then applies the outcome to the session. Flow bodies are split by
//! concern across `upload`, `augment`, `history`, and `download`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a [`FlowError`] and also recorded as an error
//! notice. Validation failures never reach the network. Backend errors show
//! the backend's own text when it sent one; anything else shows the flow's
//! generic message. Nothing is retried.


#[cfg(test)]
pub(crate) mod test_helpers;

mod augment;
mod download;
mod history;
mod upload;

pub use history::DeleteOutcome;
pub use upload::UploadInput;

use tracing::{debug, warn};

use crate::messages::Messages;
use crate::net::api::{ApiError, AugmentApi};
use crate::state::loading::{LoadingGuard, LoadingIndicator};
use crate::state::session::{NoticeKind, SessionState, Tab};
use crate::view::{Action, PageView, RenderContext, render_page};

// =============================================================================
// ERRORS
// =============================================================================

/// Input problems caught before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Validation {
    #[error("no images selected")]
    NoImages,
    #[error("no augmentation selected")]
    NoAugmentations,
    #[error("no active task")]
    NoActiveTask,
    #[error("re-augment dialog is not open")]
    DialogClosed,
    #[error("unknown augmentation: {0}")]
    UnknownAugmentation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("validation failed: {0}")]
    Validation(#[from] Validation),

    /// Another flow holds the loading indicator.
    #[error("another request is in progress")]
    Busy,

    #[error(transparent)]
    Request(#[from] ApiError),
}

// =============================================================================
// CONFIRMATION
// =============================================================================

/// Interactive yes/no prompt used before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of dispatching a view [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Done,
    /// The upload form lives outside the controller; the caller must collect
    /// files and call [`Controller::upload`].
    UploadRequested,
    Downloaded { output_id: String, bytes: Vec<u8> },
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct Controller<A> {
    api: A,
    session: SessionState,
    loading: LoadingIndicator,
    messages: Messages,
}

impl<A: AugmentApi> Controller<A> {
    pub fn new(api: A, messages: Messages) -> Self {
        Self::with_indicator(api, messages, LoadingIndicator::default())
    }

    /// Build a controller sharing an existing loading indicator.
    pub fn with_indicator(api: A, messages: Messages, loading: LoadingIndicator) -> Self {
        Self { api, session: SessionState::default(), loading, messages }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn indicator(&self) -> &LoadingIndicator {
        &self.loading
    }

    /// Render the current session.
    pub fn view(&self) -> PageView {
        let ctx = RenderContext {
            messages: &self.messages,
            endpoints: self.api.endpoints(),
            loading: self.loading.is_loading(),
        };
        render_page(&self.session, &ctx)
    }

    /// Initial page load: fetch the catalog and the task history.
    ///
    /// Failures are recorded as notices; the page stays usable.
    pub async fn start(&mut self) {
        if let Err(err) = self.load_catalog().await {
            debug!(error = %err, "start: catalog unavailable");
        }
        if let Err(err) = self.load_history().await {
            debug!(error = %err, "start: history unavailable");
        }
    }

    /// Fetch the augmentation catalog shared by both selection lists.
    ///
    /// # Errors
    ///
    /// Returns the request error; the notice is always the generic catalog message.
    pub async fn load_catalog(&mut self) -> Result<(), FlowError> {
        match self.api.list_augmentations().await {
            Ok(catalog) => {
                debug!(count = catalog.len(), "catalog loaded");
                self.session.set_catalog(catalog);
                Ok(())
            }
            Err(err) => {
                let message = self.messages.catalog_failed();
                Err(self.fail_generic(err.into(), message))
            }
        }
    }

    /// Switch tabs; activating the history tab reloads the task list.
    ///
    /// # Errors
    ///
    /// Returns the history load error when the refresh fails.
    pub async fn activate_tab(&mut self, tab: Tab) -> Result<(), FlowError> {
        if self.session.activate_tab(tab) {
            self.load_history().await?;
        }
        Ok(())
    }

    /// Make an existing task the preview/apply target.
    pub fn target_task(&mut self, task_id: impl Into<String>) {
        self.session.target_task(task_id.into());
    }

    /// Toggle an id in the primary selection; returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`Validation::UnknownAugmentation`] for ids outside the catalog.
    pub fn toggle_augmentation(&mut self, id: &str) -> Result<bool, FlowError> {
        self.require_known(id)?;
        Ok(self.session.selection.toggle(id))
    }

    /// Add an id to the primary selection; selecting twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Validation::UnknownAugmentation`] for ids outside the catalog.
    pub fn select_augmentation(&mut self, id: &str) -> Result<(), FlowError> {
        self.require_known(id)?;
        self.session.selection.set(id, true);
        Ok(())
    }

    /// Toggle an id in the re-augment dialog's selection.
    ///
    /// # Errors
    ///
    /// Returns [`Validation::UnknownAugmentation`] for ids outside the catalog.
    pub fn toggle_reaugment_augmentation(&mut self, id: &str) -> Result<bool, FlowError> {
        self.require_known(id)?;
        Ok(self.session.modal.selection.toggle(id))
    }

    /// Route a view action to its flow.
    ///
    /// # Errors
    ///
    /// Propagates the error of the flow the action triggers.
    pub async fn dispatch(&mut self, action: Action, confirm: &dyn Confirm) -> Result<Dispatched, FlowError> {
        match action {
            Action::SwitchTab(tab) => self.activate_tab(tab).await?,
            Action::Upload => return Ok(Dispatched::UploadRequested),
            Action::ToggleAugmentation(id) => {
                self.toggle_augmentation(&id)?;
            }
            Action::ToggleReaugmentAugmentation(id) => {
                self.toggle_reaugment_augmentation(&id)?;
            }
            Action::Preview => {
                self.preview().await?;
            }
            Action::Apply => {
                self.apply().await?;
            }
            Action::OpenReaugment(task_id) => self.open_reaugment(task_id),
            Action::CloseModal => self.close_modal(),
            Action::ConfirmReaugment => {
                self.apply_reaugment().await?;
            }
            Action::DeleteTask(task_id) => {
                self.delete_task(&task_id, confirm).await?;
            }
            Action::Download { output_id, .. } => {
                let bytes = self.download(&output_id).await?;
                return Ok(Dispatched::Downloaded { output_id, bytes });
            }
        }
        Ok(Dispatched::Done)
    }

    // =========================================================================
    // SHARED FLOW PLUMBING
    // =========================================================================

    fn begin(&mut self) -> Result<LoadingGuard, FlowError> {
        match self.loading.try_begin() {
            Some(guard) => Ok(guard),
            None => Err(self.fail(FlowError::Busy, "")),
        }
    }

    fn require_known(&mut self, id: &str) -> Result<(), FlowError> {
        if self.session.is_known_augmentation(id) {
            Ok(())
        } else {
            Err(self.fail(Validation::UnknownAugmentation(id.to_owned()).into(), ""))
        }
    }

    fn require_selection(&mut self, ids: Vec<String>) -> Result<Vec<String>, FlowError> {
        if ids.is_empty() {
            return Err(self.fail(Validation::NoAugmentations.into(), ""));
        }
        Ok(ids)
    }

    fn succeed(&mut self, message: impl Into<String>) {
        self.session.notify(NoticeKind::Success, message);
    }

    /// Record an error notice; backend text wins over `fallback`.
    fn fail(&mut self, err: FlowError, fallback: &str) -> FlowError {
        let message = match &err {
            FlowError::Validation(validation) => self.validation_message(validation),
            FlowError::Busy => self.messages.busy().to_owned(),
            FlowError::Request(api) if api.is_transport() => fallback.to_owned(),
            FlowError::Request(api) => api.backend_message().unwrap_or(fallback).to_owned(),
        };
        warn!(error = %err, %message, "flow failed");
        self.session.notify(NoticeKind::Error, message);
        err
    }

    /// Record an error notice that always uses `message`.
    fn fail_generic(&mut self, err: FlowError, message: &str) -> FlowError {
        warn!(error = %err, %message, "flow failed");
        self.session.notify(NoticeKind::Error, message);
        err
    }

    fn validation_message(&self, validation: &Validation) -> String {
        match validation {
            Validation::NoImages => self.messages.choose_images().to_owned(),
            Validation::NoAugmentations => self.messages.choose_augmentation().to_owned(),
            Validation::NoActiveTask => self.messages.no_active_task().to_owned(),
            Validation::DialogClosed => self.messages.dialog_closed().to_owned(),
            Validation::UnknownAugmentation(id) => self.messages.unknown_augmentation(id),
        }
    }

    async fn refresh_history(&mut self) {
        if let Err(err) = self.load_history().await {
            debug!(error = %err, "history refresh after flow failed");
        }
    }
}
