//! In-memory board state for the stub server.

use taskboard_api::project::{NewProject, Project};
use taskboard_api::task::{NewTask, Task, TaskPatch};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Errors returned by the stub's board operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No task with the given id exists.
    #[error("task not found: {0}")]
    TaskNotFound(String),
    /// A required field was empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// The board behind the lock: projects in creation order plus tasks
/// that name no project (or a project the stub does not know).
#[derive(Debug, Default)]
struct Board {
    projects: Vec<Project>,
    unattached: Vec<Task>,
}

/// Shared stub state: one board behind a single lock, so each request
/// is an atomic read-modify-write.
#[derive(Debug, Default)]
pub struct BoardState {
    board: RwLock<Board>,
}

impl BoardState {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all projects with their nested tasks, in creation order.
    pub async fn list_projects(&self) -> Vec<Project> {
        self.board.read().await.projects.clone()
    }

    /// Creates a project with a server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyField`] when the name is empty.
    pub async fn create_project(&self, new: NewProject) -> Result<Project, ApiError> {
        if new.name.is_empty() {
            return Err(ApiError::EmptyField("name"));
        }
        let project = Project {
            id: Uuid::now_v7().to_string(),
            name: new.name,
            description: new.description,
            tasks: vec![],
        };
        self.board.write().await.projects.push(project.clone());
        Ok(project)
    }

    /// Creates a task with a server-assigned id, attaching it to the
    /// named project when that project exists.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyField`] when the title is empty.
    pub async fn create_task(&self, new: NewTask) -> Result<Task, ApiError> {
        if new.title.is_empty() {
            return Err(ApiError::EmptyField("title"));
        }
        let task = Task {
            id: Uuid::now_v7().to_string(),
            title: new.title,
            description: new.description,
            status: new.status,
            project_id: new.project_id,
            assigned_user_id: None,
        };
        let mut board = self.board.write().await;
        Self::place(&mut board, task.clone());
        Ok(task)
    }

    /// Applies a partial update to a task. A `projectId` patch moves the
    /// task between projects.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::TaskNotFound`] for an unknown task id.
    pub async fn patch_task(&self, task_id: &str, patch: TaskPatch) -> Result<Task, ApiError> {
        let mut board = self.board.write().await;

        // A project change relocates the task; other patches apply in place.
        if patch.project_id.is_some() {
            let mut task = Self::remove(&mut board, task_id)
                .ok_or_else(|| ApiError::TaskNotFound(task_id.to_string()))?;
            Self::apply(&mut task, &patch);
            task.project_id = patch.project_id;
            Self::place(&mut board, task.clone());
            return Ok(task);
        }

        let task = Self::find_mut(&mut board, task_id)
            .ok_or_else(|| ApiError::TaskNotFound(task_id.to_string()))?;
        Self::apply(task, &patch);
        Ok(task.clone())
    }

    /// Copies the non-relocating patch fields onto a task.
    fn apply(task: &mut Task, patch: &TaskPatch) {
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(user_id) = &patch.assigned_user_id {
            task.assigned_user_id = Some(user_id.clone());
        }
    }

    /// Inserts a task under the project its `project_id` names, or into
    /// the unattached pool when no such project exists.
    fn place(board: &mut Board, task: Task) {
        let holder = task
            .project_id
            .as_ref()
            .and_then(|pid| board.projects.iter_mut().find(|p| &p.id == pid));
        match holder {
            Some(project) => project.tasks.push(task),
            None => board.unattached.push(task),
        }
    }

    /// Removes a task from wherever it lives, returning it.
    fn remove(board: &mut Board, task_id: &str) -> Option<Task> {
        if let Some(pos) = board.unattached.iter().position(|t| t.id == task_id) {
            return Some(board.unattached.remove(pos));
        }
        for project in &mut board.projects {
            if let Some(pos) = project.tasks.iter().position(|t| t.id == task_id) {
                return Some(project.tasks.remove(pos));
            }
        }
        None
    }

    /// Finds a task by id across projects and the unattached pool.
    fn find_mut<'a>(board: &'a mut Board, task_id: &str) -> Option<&'a mut Task> {
        if let Some(pos) = board.unattached.iter().position(|t| t.id == task_id) {
            return board.unattached.get_mut(pos);
        }
        board
            .projects
            .iter_mut()
            .find_map(|p| p.tasks.iter_mut().find(|t| t.id == task_id))
    }
}
