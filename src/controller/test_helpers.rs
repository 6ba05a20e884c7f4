//! Recording backend double for controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::net::api::{ApiError, AugmentApi, Endpoints};
use crate::net::types::{
    AugmentResponse, AugmentationDefinition, AugmentedPreview, DeleteResponse, PreviewResponse, Task, UploadForm,
    UploadResponse,
};
use crate::state::loading::LoadingIndicator;

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ListAugmentations,
    Upload { task_name: String, label_format: String, images: Vec<String>, labels: Vec<String> },
    Preview { task_id: String, augmentations: Vec<String> },
    Augment { task_id: String, augmentations: Vec<String> },
    ListTasks,
    DeleteTask(String),
    PreviewImage(String),
    Download(String),
}

type Queue<T> = Mutex<VecDeque<Result<T, ApiError>>>;

/// Scripted [`AugmentApi`]. Each endpoint pops a queued reply and falls back
/// to a canned success when its queue is empty.
pub struct MockApi {
    endpoints: Endpoints,
    calls: Mutex<Vec<Call>>,
    watched: Mutex<Option<LoadingIndicator>>,
    loading_seen: Mutex<Vec<bool>>,
    catalog: Queue<Vec<AugmentationDefinition>>,
    uploads: Queue<UploadResponse>,
    previews: Queue<PreviewResponse>,
    augments: Queue<AugmentResponse>,
    tasks: Queue<Vec<Task>>,
    deletes: Queue<DeleteResponse>,
    downloads: Queue<Vec<u8>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::parse("http://127.0.0.1:222").expect("valid base"),
            calls: Mutex::new(Vec::new()),
            watched: Mutex::new(None),
            loading_seen: Mutex::new(Vec::new()),
            catalog: Mutex::new(VecDeque::new()),
            uploads: Mutex::new(VecDeque::new()),
            previews: Mutex::new(VecDeque::new()),
            augments: Mutex::new(VecDeque::new()),
            tasks: Mutex::new(VecDeque::new()),
            deletes: Mutex::new(VecDeque::new()),
            downloads: Mutex::new(VecDeque::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than the list endpoints.
    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, Call::ListAugmentations | Call::ListTasks))
            .collect()
    }

    /// Record the indicator state at every call.
    pub fn watch(&self, indicator: LoadingIndicator) {
        *self.watched.lock().unwrap() = Some(indicator);
    }

    pub fn loading_seen(&self) -> Vec<bool> {
        self.loading_seen.lock().unwrap().clone()
    }

    pub fn push_catalog(&self, reply: Result<Vec<AugmentationDefinition>, ApiError>) {
        self.catalog.lock().unwrap().push_back(reply);
    }

    pub fn push_upload(&self, reply: Result<UploadResponse, ApiError>) {
        self.uploads.lock().unwrap().push_back(reply);
    }

    pub fn push_preview(&self, reply: Result<PreviewResponse, ApiError>) {
        self.previews.lock().unwrap().push_back(reply);
    }

    pub fn push_augment(&self, reply: Result<AugmentResponse, ApiError>) {
        self.augments.lock().unwrap().push_back(reply);
    }

    pub fn push_tasks(&self, reply: Result<Vec<Task>, ApiError>) {
        self.tasks.lock().unwrap().push_back(reply);
    }

    pub fn push_delete(&self, reply: Result<DeleteResponse, ApiError>) {
        self.deletes.lock().unwrap().push_back(reply);
    }

    pub fn push_download(&self, reply: Result<Vec<u8>, ApiError>) {
        self.downloads.lock().unwrap().push_back(reply);
    }

    fn record(&self, call: Call) {
        if let Some(indicator) = self.watched.lock().unwrap().as_ref() {
            self.loading_seen.lock().unwrap().push(indicator.is_loading());
        }
        self.calls.lock().unwrap().push(call);
    }
}

fn next<T>(queue: &Queue<T>, default: impl FnOnce() -> T) -> Result<T, ApiError> {
    queue.lock().unwrap().pop_front().unwrap_or_else(|| Ok(default()))
}

// =============================================================================
// FIXTURES
// =============================================================================

pub fn definition(id: &str, name: &str) -> AugmentationDefinition {
    AugmentationDefinition { id: id.to_owned(), name: name.to_owned(), description: format!("{name} description") }
}

/// Catalog in backend order: rotate, flip, brightness.
pub fn catalog() -> Vec<AugmentationDefinition> {
    vec![definition("rotate", "Rotate"), definition("flip", "Flip"), definition("brightness", "Brightness")]
}

pub fn upload_response(task_id: &str) -> UploadResponse {
    UploadResponse {
        task_id: task_id.to_owned(),
        uploaded_images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
        uploaded_labels: vec!["a.txt".into(), "b.txt".into(), "c.txt".into()],
        message: Some("Upload successful".into()),
    }
}

pub fn preview_response() -> PreviewResponse {
    PreviewResponse {
        original_image: "previews/original_ab.jpg".into(),
        original_bbox_count: 2,
        augmented_images: vec![AugmentedPreview {
            augmentation_id: Some("rotate".into()),
            augmentation_name: "Rotate".into(),
            image_path: "previews/rotate_ab.jpg".into(),
            bbox_count: 2,
        }],
    }
}

pub fn augment_response(output_id: &str) -> AugmentResponse {
    AugmentResponse {
        output_id: output_id.to_owned(),
        original_count: 3,
        augmented_count: 6,
        total_count: 9,
        processed_count: 3,
        message: None,
    }
}

pub fn task(id: &str) -> Task {
    Task {
        id: id.to_owned(),
        name: format!("Task {id}"),
        image_count: 3,
        label_format: "yolo".into(),
        created_at: "2024-05-01T10:00:00".into(),
        augmentations: Vec::new(),
    }
}

pub fn http_error(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Http { status, message: message.map(str::to_owned) }
}

#[async_trait]
impl AugmentApi for MockApi {
    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn list_augmentations(&self) -> Result<Vec<AugmentationDefinition>, ApiError> {
        self.record(Call::ListAugmentations);
        next(&self.catalog, catalog)
    }

    async fn upload(&self, form: UploadForm) -> Result<UploadResponse, ApiError> {
        self.record(Call::Upload {
            task_name: form.task_name.clone(),
            label_format: form.label_format.clone(),
            images: form.images.iter().map(|f| f.file_name.clone()).collect(),
            labels: form.labels.iter().map(|f| f.file_name.clone()).collect(),
        });
        next(&self.uploads, || upload_response("t1"))
    }

    async fn preview(&self, task_id: &str, augmentations: &[String]) -> Result<PreviewResponse, ApiError> {
        self.record(Call::Preview { task_id: task_id.to_owned(), augmentations: augmentations.to_vec() });
        next(&self.previews, preview_response)
    }

    async fn augment(&self, task_id: &str, augmentations: &[String]) -> Result<AugmentResponse, ApiError> {
        self.record(Call::Augment { task_id: task_id.to_owned(), augmentations: augmentations.to_vec() });
        next(&self.augments, || augment_response("o1"))
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.record(Call::ListTasks);
        next(&self.tasks, Vec::new)
    }

    async fn delete_task(&self, task_id: &str) -> Result<DeleteResponse, ApiError> {
        self.record(Call::DeleteTask(task_id.to_owned()));
        next(&self.deletes, || DeleteResponse { message: Some("Task deleted".into()) })
    }

    async fn preview_image(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        self.record(Call::PreviewImage(path.to_owned()));
        Ok(vec![0xFF, 0xD8])
    }

    async fn download(&self, output_id: &str) -> Result<Vec<u8>, ApiError> {
        self.record(Call::Download(output_id.to_owned()));
        next(&self.downloads, || b"PK\x03\x04".to_vec())
    }
}

// =============================================================================
// CONTROLLER SETUP
// =============================================================================

/// Controller over a fresh [`MockApi`] after the initial page load.
pub async fn started() -> super::Controller<MockApi> {
    let mut controller = super::Controller::new(MockApi::new(), crate::messages::Messages::default());
    controller.start().await;
    controller
}

/// Latest notice as `(is_error, message)`.
pub fn last_notice(controller: &super::Controller<MockApi>) -> (bool, String) {
    let notice = controller.session().latest_notice().expect("a notice");
    (notice.kind == crate::state::session::NoticeKind::Error, notice.message.clone())
}
