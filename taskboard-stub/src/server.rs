//! HTTP surface of the stub server: routing and handler plumbing.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use taskboard_api::project::{NewProject, Project};
use taskboard_api::task::{NewTask, Task, TaskPatch};

use crate::state::{ApiError, BoardState};

impl ApiError {
    /// HTTP status for this error.
    const fn status(&self) -> StatusCode {
        match self {
            Self::TaskNotFound(_) => StatusCode::NOT_FOUND,
            Self::EmptyField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// `GET /projects`
async fn list_projects(State(state): State<Arc<BoardState>>) -> Json<Vec<Project>> {
    let projects = state.list_projects().await;
    tracing::debug!(count = projects.len(), "listing projects");
    Json(projects)
}

/// `POST /projects`
async fn create_project(
    State(state): State<Arc<BoardState>>,
    Json(new): Json<NewProject>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = state.create_project(new).await?;
    tracing::info!(project_id = %project.id, name = %project.name, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// `POST /tasks`
async fn create_task(
    State(state): State<Arc<BoardState>>,
    Json(new): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state.create_task(new).await?;
    tracing::info!(task_id = %task.id, title = %task.title, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PATCH /tasks/{task_id}`
async fn patch_task(
    State(state): State<Arc<BoardState>>,
    Path(task_id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    let task = state.patch_task(&task_id, patch).await?;
    tracing::info!(task_id = %task.id, status = %task.status, "task patched");
    Ok(Json(task))
}

/// Builds the stub router over a shared board state.
fn router(state: Arc<BoardState>) -> axum::Router {
    axum::Router::new()
        .route(
            "/projects",
            axum::routing::get(list_projects).post(create_project),
        )
        .route("/tasks", axum::routing::post(create_task))
        .route("/tasks/{task_id}", axum::routing::patch(patch_task))
        .with_state(state)
}

/// Starts the stub server on the given address and returns the bound
/// address and a join handle.
///
/// This is the primary entry point used by both `main.rs` and test code
/// (bind to port 0 for an OS-assigned port).
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server(
    addr: &str,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    start_server_with_state(addr, Arc::new(BoardState::new())).await
}

/// Starts the stub server with a pre-populated [`BoardState`].
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server_with_state(
    addr: &str,
    state: Arc<BoardState>,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "stub server error");
        }
    });

    Ok((bound_addr, handle))
}
