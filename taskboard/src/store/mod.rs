//! In-memory board state and derived views.
//!
//! [`BoardStore`] holds the cached project list, the free-text filter,
//! the selection used for task creation, and the not-yet-submitted task
//! draft. All remote data flows through the gateways; the store patches
//! its cache from the entities the server returns.

pub mod board;
pub mod filter;

pub use board::{BoardStore, LoadState, TaskDraft};
pub use filter::filter_projects;

use thiserror::Error;

use crate::gateway::GatewayError;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Task title cannot be empty.
    #[error("task title cannot be empty")]
    TitleEmpty,
    /// Task title exceeds the maximum length.
    #[error("task title too long (max 256 characters)")]
    TitleTooLong,
    /// Project name cannot be empty.
    #[error("project name cannot be empty")]
    ProjectNameEmpty,
    /// No project is selected for task creation.
    #[error("no project selected")]
    NoProjectSelected,
    /// A gateway call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
