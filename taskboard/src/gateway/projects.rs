//! Project operations against the REST API.
//!
//! Projects expose only listing and creation; there are no update or
//! delete operations in this API.

use taskboard_api::project::{NewProject, Project};

use super::{Endpoint, GatewayError};
use crate::config::ApiConfig;

/// Stateless façade for project operations.
#[derive(Debug, Clone)]
pub struct ProjectGateway {
    endpoint: Endpoint,
}

impl ProjectGateway {
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

    /// Lists all projects with their nested tasks via `GET /projects`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport failure, a non-success
    /// status, or an undecodable response body.
    pub async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
        tracing::debug!("listing projects");
        self.endpoint.get_json("list_projects", "/projects").await
    }

    /// Creates a project via `POST /projects` and returns the created
    /// entity, including its server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport failure, a non-success
    /// status, or an undecodable response body.
    pub async fn create_project(&self, project: &NewProject) -> Result<Project, GatewayError> {
        tracing::debug!(name = %project.name, "creating project");
        self.endpoint
            .post_json("create_project", "/projects", project)
            .await
    }
}
