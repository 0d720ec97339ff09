//! Integration tests for the board store run against an in-process
//! stub backend.
//!
//! Exercises the full client flow: load the board, select a project,
//! draft a task, submit it, and mutate existing tasks, asserting the
//! cache after every step.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use taskboard::config::ApiConfig;
use taskboard::gateway::{ProjectGateway, TaskGateway};
use taskboard::store::{BoardStore, LoadState, StoreError, TaskDraft};
use taskboard_api::project::NewProject;
use taskboard_api::task::TaskStatus;
use taskboard_stub::server::start_server_with_state;
use taskboard_stub::state::BoardState;

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Starts a stub backend seeded with the given project names and
/// returns a store pointed at it.
async fn start_board(project_names: &[&str]) -> BoardStore {
    let state = Arc::new(BoardState::new());
    for name in project_names {
        state
            .create_project(NewProject {
                name: (*name).to_string(),
                description: String::new(),
            })
            .await
            .expect("seed project");
    }
    let (addr, _handle) = start_server_with_state("127.0.0.1:0", state)
        .await
        .expect("start stub");
    make_store(&format!("http://{addr}"))
}

/// Builds a store whose gateways point at the given base URL.
fn make_store(base_url: &str) -> BoardStore {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    BoardStore::new(
        TaskGateway::new(&config).expect("task gateway"),
        ProjectGateway::new(&config).expect("project gateway"),
    )
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_replaces_cache_and_selects_first_project() {
    let mut store = start_board(&["Backend", "Frontend"]).await;
    store.load_projects().await.expect("load");

    assert_eq!(store.load_state(), LoadState::Loaded);
    assert_eq!(store.projects().len(), 2);
    assert_eq!(
        store.selected_project_id(),
        Some(store.projects()[0].id.as_str())
    );
}

#[tokio::test]
async fn load_of_empty_backend_leaves_no_selection() {
    let mut store = start_board(&[]).await;
    store.load_projects().await.expect("load");

    assert_eq!(store.load_state(), LoadState::Loaded);
    assert!(store.projects().is_empty());
    assert_eq!(store.selected_project_id(), None);
}

#[tokio::test]
async fn failed_load_is_tagged_and_leaves_cache_untouched() {
    // Grab a free port, then drop the listener so nothing answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let mut store = make_store(&format!("http://{addr}"));
    let err = store.load_projects().await.expect_err("should fail");

    assert!(matches!(err, StoreError::Gateway(_)));
    assert_eq!(store.load_state(), LoadState::Failed);
    assert!(store.projects().is_empty());
    assert_eq!(store.selected_project_id(), None);
}

// ---------------------------------------------------------------------------
// Task creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_appends_server_task_and_resets_draft() {
    let mut store = start_board(&["Backend"]).await;
    store.load_projects().await.expect("load");

    store.set_draft_title("Fix bug");
    store.set_draft_description("urgent");
    store.set_draft_status(TaskStatus::InProgress);
    let created = store.submit_new_task().await.expect("submit");

    // The cached copy is the server-returned entity, id included.
    assert!(!created.id.is_empty());
    let cached = &store.projects()[0].tasks;
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].id, created.id);
    assert_eq!(cached[0].status, TaskStatus::InProgress);
    assert_eq!(
        cached[0].project_id.as_deref(),
        Some(store.projects()[0].id.as_str())
    );

    // Draft is reset only after a confirmed create.
    assert_eq!(*store.draft(), TaskDraft::default());
}

#[tokio::test]
async fn submit_against_stale_selection_leaves_cache_unchanged() {
    let mut store = start_board(&["Backend"]).await;
    store.load_projects().await.expect("load");

    // Force a selection the cache does not hold.
    store.select_project("ghost");
    store.set_draft_title("Fix bug");
    store.submit_new_task().await.expect("submit");

    // The task exists remotely but no cached project gained it.
    assert!(store.projects()[0].tasks.is_empty());
}

#[tokio::test]
async fn failed_submit_preserves_draft_for_retry() {
    let mut store = start_board(&["Backend"]).await;
    store.load_projects().await.expect("load");

    // An empty title fails client-side, before any request is issued.
    let err = store.submit_new_task().await.expect_err("should fail");
    assert!(matches!(err, StoreError::TitleEmpty));

    store.set_draft_title("Fix bug");
    assert_eq!(store.draft().title, "Fix bug");
    store.submit_new_task().await.expect("retry succeeds");
}

// ---------------------------------------------------------------------------
// Task mutations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_task_patches_cached_copy() {
    let mut store = start_board(&["Backend"]).await;
    store.load_projects().await.expect("load");
    store.set_draft_title("Fix bug");
    let created = store.submit_new_task().await.expect("submit");

    let done = store.complete_task(&created.id).await.expect("complete");
    assert_eq!(done.status, TaskStatus::Done);
    assert_eq!(store.projects()[0].tasks[0].status, TaskStatus::Done);
}

#[tokio::test]
async fn assign_task_patches_cached_copy() {
    let mut store = start_board(&["Backend"]).await;
    store.load_projects().await.expect("load");
    store.set_draft_title("Fix bug");
    let created = store.submit_new_task().await.expect("submit");

    store
        .assign_task(&created.id, "user-42")
        .await
        .expect("assign");
    assert_eq!(
        store.projects()[0].tasks[0].assigned_user_id.as_deref(),
        Some("user-42")
    );
}

#[tokio::test]
async fn move_task_rehomes_cached_copy() {
    let mut store = start_board(&["Backend", "Frontend"]).await;
    store.load_projects().await.expect("load");
    store.set_draft_title("Fix bug");
    let created = store.submit_new_task().await.expect("submit");
    let target_id = store.projects()[1].id.clone();

    store
        .move_task(&created.id, &target_id)
        .await
        .expect("move");
    assert!(store.projects()[0].tasks.is_empty());
    assert_eq!(store.projects()[1].tasks.len(), 1);
    assert_eq!(
        store.projects()[1].tasks[0].project_id.as_deref(),
        Some(target_id.as_str())
    );
}

// ---------------------------------------------------------------------------
// Project creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_project_appends_and_selects_when_nothing_selected() {
    let mut store = start_board(&[]).await;
    store.load_projects().await.expect("load");
    assert_eq!(store.selected_project_id(), None);

    let created = store
        .create_project("Backend", "server work")
        .await
        .expect("create");
    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.selected_project_id(), Some(created.id.as_str()));

    // A second project does not steal the selection.
    store
        .create_project("Frontend", "")
        .await
        .expect("create second");
    assert_eq!(store.selected_project_id(), Some(created.id.as_str()));
}

#[tokio::test]
async fn create_project_with_empty_name_is_rejected_client_side() {
    let mut store = start_board(&[]).await;
    let err = store.create_project("", "").await.expect_err("should fail");
    assert!(matches!(err, StoreError::ProjectNameEmpty));
}

// ---------------------------------------------------------------------------
// Filtering over live data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn filtered_view_reflects_submitted_tasks() {
    let mut store = start_board(&["Backend", "Frontend"]).await;
    store.load_projects().await.expect("load");

    store.set_draft_title("Fix login bug");
    store.submit_new_task().await.expect("submit first");

    let frontend_id = store.projects()[1].id.clone();
    store.select_project(frontend_id);
    store.set_draft_title("Polish styles");
    store.submit_new_task().await.expect("submit second");

    store.set_filter("login");
    let view = store.filtered_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Backend");
    assert_eq!(view[0].tasks.len(), 1);

    store.set_filter("");
    assert_eq!(store.filtered_view().len(), 2);
}
