use std::cell::RefCell;

use super::*;

use crate::controller::test_helpers::{Call, http_error, last_notice, started, task};
use crate::state::session::Tab;

// =============================================================
// Listing
// =============================================================

#[tokio::test]
async fn history_tab_reloads_and_upload_tab_does_not() {
    let mut c = started().await;
    assert_eq!(c.api().calls(), vec![Call::ListAugmentations, Call::ListTasks]);

    c.activate_tab(Tab::History).await.unwrap();
    c.activate_tab(Tab::Upload).await.unwrap();

    assert_eq!(c.api().calls(), vec![Call::ListAugmentations, Call::ListTasks, Call::ListTasks]);
    assert_eq!(c.session().active_tab, Tab::Upload);
}

#[tokio::test]
async fn history_replaces_task_list() {
    let mut c = started().await;
    c.api().push_tasks(Ok(vec![task("t1"), task("t2")]));

    c.load_history().await.unwrap();

    let ids: Vec<_> = c.session().tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2"]);
}

#[tokio::test]
async fn history_failure_uses_generic_message() {
    let mut c = started().await;
    c.api().push_tasks(Err(http_error(500, Some("database is locked"))));

    c.load_history().await.unwrap_err();

    assert_eq!(last_notice(&c), (true, "Không thể tải lịch sử tasks".to_owned()));
}

// =============================================================
// Deletion
// =============================================================

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let mut c = started().await;

    let outcome = c.delete_task("t1", &|_: &str| false).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert!(c.api().mutating_calls().is_empty());
    assert!(c.session().latest_notice().is_none());
}

#[tokio::test]
async fn confirmed_delete_refreshes_history() {
    let mut c = started().await;
    c.api().push_tasks(Ok(vec![task("t2")]));
    let prompt = RefCell::new(String::new());
    let confirm = |text: &str| {
        *prompt.borrow_mut() = text.to_owned();
        true
    };

    let outcome = c.delete_task("t1", &confirm).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(prompt.borrow().as_str(), "Bạn có chắc chắn muốn xóa task này?");
    let calls = c.api().calls();
    assert_eq!(&calls[2..], &[Call::DeleteTask("t1".into()), Call::ListTasks]);
    assert_eq!(c.session().tasks.len(), 1);
    assert_eq!(last_notice(&c), (false, "Đã xóa task thành công".to_owned()));
}

#[tokio::test]
async fn delete_failure_shows_backend_text() {
    let mut c = started().await;
    c.api().push_delete(Err(http_error(404, Some("Task not found"))));

    c.delete_task("missing", &|_: &str| true).await.unwrap_err();

    assert_eq!(last_notice(&c), (true, "Task not found".to_owned()));
    assert_eq!(c.api().calls().last(), Some(&Call::DeleteTask("missing".into())));
    assert!(!c.indicator().is_loading());
}
