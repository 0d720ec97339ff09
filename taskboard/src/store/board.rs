//! The board store: cached projects, filter, selection, and task draft.

use taskboard_api::project::{NewProject, Project};
use taskboard_api::task::{MAX_TITLE_LENGTH, NewTask, Task, TaskStatus};

use super::StoreError;
use super::filter::filter_projects;
use crate::gateway::{ProjectGateway, TaskGateway};

/// The client-held, not-yet-submitted form state for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Draft title.
    pub title: String,
    /// Draft description.
    pub description: String,
    /// Initial status for the new task.
    pub status: TaskStatus,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
        }
    }
}

/// Outcome of the most recent project load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been attempted yet.
    Idle,
    /// A load request is in flight.
    Loading,
    /// The last load succeeded.
    Loaded,
    /// The last load failed; the cached list was left untouched.
    Failed,
}

/// In-memory view-model over the remote board.
///
/// Holds the authoritative cached project list, the free-text filter,
/// the project selected for task creation, and the task draft. The
/// cache is replaced wholesale by [`load_projects`](Self::load_projects)
/// and patched incrementally from server-returned entities after each
/// mutation; no reconciliation with concurrent external changes is
/// attempted.
#[derive(Debug)]
pub struct BoardStore {
    projects: Vec<Project>,
    filter: String,
    selected_project_id: Option<String>,
    draft: TaskDraft,
    load_state: LoadState,
    task_gateway: TaskGateway,
    project_gateway: ProjectGateway,
}

impl BoardStore {
    /// Creates an empty store over the given gateways.
    #[must_use]
    pub fn new(task_gateway: TaskGateway, project_gateway: ProjectGateway) -> Self {
        Self {
            projects: Vec::new(),
            filter: String::new(),
            selected_project_id: None,
            draft: TaskDraft::default(),
            load_state: LoadState::Idle,
            task_gateway,
            project_gateway,
        }
    }

    /// Replaces the cached project list from `GET /projects`.
    ///
    /// On success the list is replaced wholesale and, when non-empty,
    /// the first project becomes the selection for task creation. On
    /// failure the cache and selection are left untouched and the store
    /// records [`LoadState::Failed`]; the error is returned as a value,
    /// never allowed to escape unhandled.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Gateway`] when the listing request fails.
    pub async fn load_projects(&mut self) -> Result<(), StoreError> {
        self.load_state = LoadState::Loading;
        match self.project_gateway.list_projects().await {
            Ok(projects) => {
                self.selected_project_id = projects.first().map(|p| p.id.clone());
                self.projects = projects;
                self.load_state = LoadState::Loaded;
                Ok(())
            }
            Err(e) => {
                self.load_state = LoadState::Failed;
                Err(e.into())
            }
        }
    }

    /// Sets the free-text filter. Pure state update, no I/O.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Computes the filtered view of the cached board.
    ///
    /// Derived on every call from `(projects, filter)`; the cache itself
    /// is never mutated.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<Project> {
        filter_projects(&self.projects, &self.filter)
    }

    /// Selects the project that new tasks will be created under.
    ///
    /// The selection is taken as-is; it may name a project the cache no
    /// longer holds (the append after a create is then a no-op). Returns
    /// whether the id matched a cached project.
    pub fn select_project(&mut self, project_id: impl Into<String>) -> bool {
        let project_id = project_id.into();
        let known = self.projects.iter().any(|p| p.id == project_id);
        self.selected_project_id = Some(project_id);
        known
    }

    /// Updates the draft title.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Updates the draft description.
    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Updates the draft status.
    pub const fn set_draft_status(&mut self, status: TaskStatus) {
        self.draft.status = status;
    }

    /// Submits the current draft as a new task under the selected project.
    ///
    /// Builds the payload from the draft plus the selected project id and
    /// calls `POST /tasks`. On success the *server-returned* task is
    /// appended to the matching cached project (lookup by id; a stale
    /// selection makes the append a silent no-op) and the draft is reset.
    /// The draft is reset only after confirmed success, so a failed
    /// submit preserves it for retry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TitleEmpty`] or [`StoreError::TitleTooLong`]
    /// for an invalid draft, [`StoreError::NoProjectSelected`] when no
    /// project is selected, or [`StoreError::Gateway`] when the create
    /// request fails.
    pub async fn submit_new_task(&mut self) -> Result<Task, StoreError> {
        if self.draft.title.is_empty() {
            return Err(StoreError::TitleEmpty);
        }
        if self.draft.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(StoreError::TitleTooLong);
        }
        let Some(project_id) = self.selected_project_id.clone() else {
            return Err(StoreError::NoProjectSelected);
        };

        let payload = NewTask {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            status: self.draft.status,
            project_id: Some(project_id.clone()),
        };
        let created = self.task_gateway.create_task(&payload).await?;

        self.attach_task(&project_id, created.clone());
        self.draft = TaskDraft::default();
        Ok(created)
    }

    /// Marks a task as done and patches the cached copy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Gateway`] when the request fails; the cache
    /// is left unpatched in that case.
    pub async fn complete_task(&mut self, task_id: &str) -> Result<Task, StoreError> {
        let updated = self.task_gateway.complete_task(task_id).await?;
        self.patch_cached_task(&updated);
        Ok(updated)
    }

    /// Assigns a task to a user and patches the cached copy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Gateway`] when the request fails.
    pub async fn assign_task(&mut self, task_id: &str, user_id: &str) -> Result<Task, StoreError> {
        let updated = self.task_gateway.assign_to_user(task_id, user_id).await?;
        self.patch_cached_task(&updated);
        Ok(updated)
    }

    /// Moves a task to another project, both remotely and in the cache.
    ///
    /// The cached task is detached from whichever project holds it and
    /// appended to the target project when that project is cached.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Gateway`] when the request fails; the cache
    /// is left unchanged in that case.
    pub async fn move_task(&mut self, task_id: &str, project_id: &str) -> Result<Task, StoreError> {
        let updated = self
            .task_gateway
            .link_to_project(task_id, project_id)
            .await?;
        self.detach_task(task_id);
        self.attach_task(project_id, updated.clone());
        Ok(updated)
    }

    /// Creates a project and appends it to the cache.
    ///
    /// When nothing was selected yet, the new project becomes the
    /// selection for task creation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNameEmpty`] for an empty name, or
    /// [`StoreError::Gateway`] when the request fails.
    pub async fn create_project(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<Project, StoreError> {
        if name.is_empty() {
            return Err(StoreError::ProjectNameEmpty);
        }
        let payload = NewProject {
            name: name.to_string(),
            description: description.to_string(),
        };
        let created = self.project_gateway.create_project(&payload).await?;
        if self.selected_project_id.is_none() {
            self.selected_project_id = Some(created.id.clone());
        }
        self.projects.push(created.clone());
        Ok(created)
    }

    /// Cached project list, unfiltered.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Currently selected project id, if any.
    #[must_use]
    pub fn selected_project_id(&self) -> Option<&str> {
        self.selected_project_id.as_deref()
    }

    /// Current task draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Outcome of the most recent load.
    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Appends a task to the cached project with the given id, forcing
    /// the task's back-reference onto that project so every task held
    /// under `Project.tasks` points at its holder. No-op when no cached
    /// project matches.
    fn attach_task(&mut self, project_id: &str, mut task: Task) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) {
            task.project_id = Some(project.id.clone());
            project.tasks.push(task);
        }
    }

    /// Overwrites the cached copy of a task in place, keeping the
    /// holder's back-reference intact. No-op when the task is not cached.
    fn patch_cached_task(&mut self, updated: &Task) {
        for project in &mut self.projects {
            let holder_id = project.id.clone();
            if let Some(slot) = project.tasks.iter_mut().find(|t| t.id == updated.id) {
                *slot = updated.clone();
                slot.project_id = Some(holder_id);
                return;
            }
        }
    }

    /// Removes a task from whichever cached project holds it.
    fn detach_task(&mut self, task_id: &str) {
        for project in &mut self.projects {
            project.tasks.retain(|t| t.id != task_id);
        }
    }
}
