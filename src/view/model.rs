//! Declarative description of the page.
//!
//! A front end (terminal printer, DOM binder, test) reads these values and
//! dispatches the attached [`Action`]s back to the controller. Nothing here
//! performs I/O.

use crate::state::session::{Notice, Tab};

/// What a control does when activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SwitchTab(Tab),
    Upload,
    ToggleAugmentation(String),
    ToggleReaugmentAugmentation(String),
    Preview,
    Apply,
    OpenReaugment(String),
    CloseModal,
    ConfirmReaugment,
    DeleteTask(String),
    /// Navigate to `href` to fetch the archive for `output_id`.
    Download { output_id: String, href: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub action: Action,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub active_tab: Tab,
    pub tabs: Vec<TabView>,
    pub upload: UploadPanelView,
    pub history: HistoryView,
    pub modal: Option<ModalView>,
    /// Loading overlay text while a request is pending.
    pub loading: Option<String>,
    pub notice: Option<Notice>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub label: String,
    pub active: bool,
    pub action: Action,
}

// =============================================================================
// UPLOAD TAB
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPanelView {
    pub upload: ButtonView,
    pub augmentation: Option<AugmentationSectionView>,
    pub preview: Option<PreviewView>,
    pub results: Option<ResultsView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentationSectionView {
    pub catalog: CatalogView,
    pub preview: ButtonView,
    pub apply: ButtonView,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub items: Vec<CatalogItemView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub selected: bool,
    pub toggle: Action,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewView {
    pub items: Vec<PreviewItemView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewItemView {
    pub title: String,
    pub image_src: String,
    pub alt: String,
    pub bbox_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsView {
    pub headline: String,
    pub stats_heading: String,
    pub stats: Vec<StatView>,
    pub download: ButtonView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatView {
    pub label: String,
    pub value: u64,
    /// Text shown next to the label, e.g. `3` or `9 ảnh` for the total.
    pub display: String,
}

// =============================================================================
// HISTORY TAB
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryView {
    Empty { placeholder: String },
    Cards(Vec<TaskCardView>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCardView {
    pub task_id: String,
    pub title: String,
    pub reaugment: ButtonView,
    pub delete: ButtonView,
    pub info: Vec<InfoView>,
    pub runs: RunsView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoView {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunsView {
    Empty { placeholder: String },
    History { heading: String, records: Vec<RunRecordView> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunRecordView {
    pub output_id: String,
    pub tags: Vec<String>,
    pub caption: String,
    pub download: ButtonView,
}

// =============================================================================
// MODAL
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub task_id: Option<String>,
    pub catalog: CatalogView,
    pub confirm: ButtonView,
    pub close: ButtonView,
}
