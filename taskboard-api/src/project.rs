//! Project wire types for the task board REST API.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// A project with its nested task list, as returned by `GET /projects`.
///
/// The order of `tasks` is insertion order and doubles as display
/// order; the client only ever appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned opaque identifier.
    pub id: String,
    /// Project name (non-empty).
    pub name: String,
    /// Project description (may be empty).
    #[serde(default)]
    pub description: String,
    /// Tasks belonging to this project.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Request body for `POST /projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Project name (non-empty).
    pub name: String,
    /// Project description (may be empty).
    #[serde(default)]
    pub description: String,
}
