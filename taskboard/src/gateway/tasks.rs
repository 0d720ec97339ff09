//! Task operations against the REST API.

use taskboard_api::task::{NewTask, Task, TaskPatch};

use super::{Endpoint, GatewayError};
use crate::config::ApiConfig;

/// Stateless façade for task operations.
///
/// The base URL and timeouts are injected at construction; tests point
/// this at an in-process stub server.
#[derive(Debug, Clone)]
pub struct TaskGateway {
    endpoint: Endpoint,
}

impl TaskGateway {
    /// Creates a gateway from the resolved API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidBaseUrl`] when the configured base
    /// URL is not a valid http(s) URL, or [`GatewayError::Transport`]
    /// when the HTTP client cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            endpoint: Endpoint::new(config)?,
        })
    }

    /// Creates a task via `POST /tasks` and returns the created entity,
    /// including its server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport failure, a non-success
    /// status, or an undecodable response body.
    pub async fn create_task(&self, task: &NewTask) -> Result<Task, GatewayError> {
        tracing::debug!(title = %task.title, "creating task");
        self.endpoint.post_json("create_task", "/tasks", task).await
    }

    /// Marks a task as done via `PATCH /tasks/{id}` with `{"status":"done"}`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport failure, a non-success
    /// status (404 for an unknown task id), or an undecodable body.
    pub async fn complete_task(&self, task_id: &str) -> Result<Task, GatewayError> {
        self.patch_task("complete_task", task_id, &TaskPatch::completed())
            .await
    }

    /// Moves a task to a project via `PATCH /tasks/{id}` with `{"projectId":…}`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport failure, a non-success
    /// status, or an undecodable body.
    pub async fn link_to_project(
        &self,
        task_id: &str,
        project_id: &str,
    ) -> Result<Task, GatewayError> {
        self.patch_task(
            "link_to_project",
            task_id,
            &TaskPatch::link_to_project(project_id),
        )
        .await
    }

    /// Assigns a task to a user via `PATCH /tasks/{id}` with
    /// `{"assignedUserId":…}`. The user id is passed through unvalidated.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport failure, a non-success
    /// status, or an undecodable body.
    pub async fn assign_to_user(
        &self,
        task_id: &str,
        user_id: &str,
    ) -> Result<Task, GatewayError> {
        self.patch_task(
            "assign_to_user",
            task_id,
            &TaskPatch::assign_to_user(user_id),
        )
        .await
    }

    /// Shared PATCH plumbing: all task mutations differ only in the
    /// partial body they send.
    async fn patch_task(
        &self,
        op: &'static str,
        task_id: &str,
        patch: &TaskPatch,
    ) -> Result<Task, GatewayError> {
        tracing::debug!(op, task_id, "patching task");
        self.endpoint
            .patch_json(op, &format!("/tasks/{task_id}"), patch)
            .await
    }
}
