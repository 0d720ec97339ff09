//! Stateless HTTP gateway façades over the task board REST API.
//!
//! Each gateway method maps one domain operation onto one HTTP
//! request/response pair and returns the decoded entity. Failures are
//! logged with operation context and propagated to the caller; the
//! gateways hold no state beyond the injected endpoint configuration.

pub mod projects;
pub mod tasks;

pub use projects::ProjectGateway;
pub use tasks::TaskGateway;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;

/// Errors emitted by the gateway layer.
///
/// The three request-time classes (transport failure, non-success
/// status, undecodable body) are handled uniformly: logged, then
/// returned to the caller.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The configured base URL is not a valid URL.
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL string.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Request transport failed (no response received).
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success HTTP status.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error body, if any.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("response decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::Decode(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}

/// Shared HTTP plumbing for the gateways: a configured client plus the
/// validated base URL.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    base_url: String,
    client: reqwest::Client,
}

impl Endpoint {
    /// Builds an endpoint from the resolved API configuration.
    pub(crate) fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        Self::with_timeouts(
            &config.base_url,
            config.connect_timeout,
            config.request_timeout,
        )
    }

    pub(crate) fn with_timeouts(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let parsed = url::Url::parse(base_url).map_err(|e| GatewayError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// POSTs a JSON body to `path` and decodes the JSON response.
    pub(crate) async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        op: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let request = self.client.post(self.url(path)).json(body);
        self.execute(op, request).await
    }

    /// PATCHes a JSON body to `path` and decodes the JSON response.
    pub(crate) async fn patch_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        op: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let request = self.client.patch(self.url(path)).json(body);
        self.execute(op, request).await
    }

    /// GETs `path` and decodes the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        op: &'static str,
        path: &str,
    ) -> Result<T, GatewayError> {
        let request = self.client.get(self.url(path));
        self.execute(op, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request and decodes a success response, mapping the three
    /// failure classes onto [`GatewayError`]. Every failure is logged
    /// with the operation name before being returned.
    async fn execute<T: DeserializeOwned>(
        &self,
        op: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(op, error = %e, "request failed");
            GatewayError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(op, status = status.as_u16(), body = %body, "API returned error status");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| {
            tracing::warn!(op, error = %e, "failed to decode response body");
            GatewayError::Decode(e.to_string())
        })
    }
}
