//! Shared JSON wire format for the task board REST API.

pub mod project;
pub mod task;
