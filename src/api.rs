//! REST API Client
//!
//! HTTP bindings to the external projects backend.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::models::Project;

/// Collection endpoint used when no other base URL is injected.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/projects";

/// Any unsuccessful interaction with the backend.
///
/// Callers log these and move on; failures are never rendered,
/// retried, or rethrown.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or undecodable response body
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    /// Server answered with a non-2xx status
    #[error("server answered with status {0}")]
    Status(u16),
}

/// Body of a create request, exactly `{title, description}`
#[derive(Serialize)]
struct CreateProjectBody<'a> {
    title: &'a str,
    description: &'a str,
}

/// Client for the projects collection endpoint.
///
/// The base URL is injected at construction rather than read from a
/// global. No retries, no timeouts, no request cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetch the full project collection, in server response order
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let response = Request::get(&self.base_url).send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Create a project from the drafted fields.
    ///
    /// No client-side validation: empty strings are submitted as-is.
    pub async fn create_project(
        &self,
        title: &str,
        description: &str,
    ) -> Result<Project, ApiError> {
        let body = CreateProjectBody { title, description };
        let response = Request::post(&self.base_url).json(&body)?.send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_client_targets_local_backend() {
        let client = ApiClient::default();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn injected_base_url_is_kept_verbatim() {
        let client = ApiClient::new("https://example.com/api/projects");
        assert_eq!(client.base_url, "https://example.com/api/projects");
    }

    #[test]
    fn create_body_has_exactly_title_and_description() {
        let body = CreateProjectBody {
            title: "Alpha",
            description: "Beta",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "Alpha", "description": "Beta"})
        );
    }

    #[test]
    fn empty_fields_are_valid_create_payloads() {
        let body = CreateProjectBody {
            title: "",
            description: "",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "", "description": ""})
        );
    }
}
