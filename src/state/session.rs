//! Page session state: targets, selections, panel visibility, and notices.
//!
//! DESIGN
//! ======
//! State transitions here are synchronous and infallible. The controller calls
//! them after a request resolves, so every mutation happens between
//! suspension points and a render never observes a half-applied response.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::selection::SelectionSet;
use crate::net::types::{AugmentResponse, AugmentationDefinition, PreviewResponse, Task};

/// Top-level tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Upload,
    History,
}

/// Visibility of the sections under the upload tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Panels {
    pub augmentation: bool,
    pub preview: bool,
    pub results: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-facing success or error message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Re-augmentation dialog state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReaugmentModal {
    pub open: bool,
    pub task_id: Option<String>,
    pub selection: SelectionSet,
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub active_tab: Tab,
    /// Catalog fetched once per session; shared by both selection widgets.
    pub catalog: Vec<AugmentationDefinition>,
    pub selection: SelectionSet,
    pub current_task_id: Option<String>,
    pub current_output_id: Option<String>,
    pub panels: Panels,
    pub preview: Option<PreviewResponse>,
    pub results: Option<AugmentResponse>,
    pub tasks: Vec<Task>,
    pub modal: ReaugmentModal,
    pub notices: Vec<Notice>,
}

impl SessionState {
    /// Switch tabs; returns `true` when the new tab needs a history refresh.
    pub fn activate_tab(&mut self, tab: Tab) -> bool {
        self.active_tab = tab;
        tab == Tab::History
    }

    pub fn set_catalog(&mut self, catalog: Vec<AugmentationDefinition>) {
        self.selection.retain_known(&catalog);
        self.modal.selection.retain_known(&catalog);
        self.catalog = catalog;
    }

    pub fn is_known_augmentation(&self, id: &str) -> bool {
        self.catalog.iter().any(|def| def.id == id)
    }

    /// Make `task_id` the target of preview/apply and reveal the selection panel.
    pub fn target_task(&mut self, task_id: String) {
        self.current_task_id = Some(task_id);
        self.panels = Panels { augmentation: true, preview: false, results: false };
    }

    pub fn show_preview(&mut self, preview: PreviewResponse) {
        self.preview = Some(preview);
        self.panels.preview = true;
    }

    pub fn show_results(&mut self, results: AugmentResponse) {
        self.current_output_id = Some(results.output_id.clone());
        self.results = Some(results);
        self.panels.results = true;
    }

    /// Replace the task list wholesale.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Open the dialog for `task_id` with a cleared selection.
    pub fn open_reaugment(&mut self, task_id: String) {
        self.modal.task_id = Some(task_id);
        self.modal.selection.clear();
        self.modal.open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal.open = false;
    }

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notices.push(Notice { kind, message: message.into() });
    }

    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}
