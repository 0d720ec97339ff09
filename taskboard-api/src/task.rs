//! Task wire types for the task board REST API.
//!
//! All types serialize with the `camelCase` field names the backend
//! negotiates (`projectId`, `assignedUserId`). Completion is represented
//! by the [`TaskStatus`] enum everywhere; there is no boolean
//! `completed` flag on the wire.

use serde::{Deserialize, Serialize};

/// Maximum allowed task title length in characters.
pub const MAX_TITLE_LENGTH: usize = 256;

/// Status of a task on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has not been started.
    Todo,
    /// Task is actively being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// A task as stored and returned by the backend.
///
/// `id` is opaque and server-assigned; the client never fabricates one.
/// `project_id` is the back-reference to the owning project. A task
/// belongs to at most one project at a time; reassignment overwrites
/// the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned opaque identifier.
    pub id: String,
    /// Task title (non-empty).
    pub title: String,
    /// Task description (may be empty).
    #[serde(default)]
    pub description: String,
    /// Completion status.
    pub status: TaskStatus,
    /// Owning project, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Assigned user, if any. Never validated by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<String>,
}

/// Request body for `POST /tasks`.
///
/// Carries the full task fields minus the id, which the server assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Task title (non-empty).
    pub title: String,
    /// Task description (may be empty).
    #[serde(default)]
    pub description: String,
    /// Initial completion status.
    pub status: TaskStatus,
    /// Project to attach the new task to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Partial request body for `PATCH /tasks/{id}`.
///
/// `None` fields are omitted from the JSON body entirely, so a patch
/// only ever touches the fields it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// New completion status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// New owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// New assigned user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<String>,
}

impl TaskPatch {
    /// Patch that marks a task as done.
    #[must_use]
    pub const fn completed() -> Self {
        Self {
            status: Some(TaskStatus::Done),
            project_id: None,
            assigned_user_id: None,
        }
    }

    /// Patch that moves a task to the given project.
    #[must_use]
    pub fn link_to_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    /// Patch that assigns a task to the given user.
    #[must_use]
    pub fn assign_to_user(user_id: impl Into<String>) -> Self {
        Self {
            assigned_user_id: Some(user_id.into()),
            ..Self::default()
        }
    }
}
