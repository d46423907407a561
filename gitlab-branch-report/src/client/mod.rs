//! Read-only client for the GitLab REST API (v4).
//!
//! Each listing follows GitLab's offset pagination until the
//! `x-next-page` header comes back empty. Requests are issued one at a time.

mod error;
mod types;

pub use error::ApiError;
pub use types::{Branch, Commit, Group, MergeRequest, MergeRequestState, Project};

use crate::config::GitLabConfig;
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Header carrying the personal access token.
const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Header naming the next page of a paginated listing.
const NEXT_PAGE_HEADER: &str = "x-next-page";

/// Results per page for listings (GitLab's maximum).
const PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Authenticated GitLab API client.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    http: reqwest::Client,
    api_url: Url,
    token: String,
}

impl GitLabClient {
    /// Builds a client for the instance described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be initialized.
    pub fn new(config: &GitLabConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            api_url: config.api_url().clone(),
            token: config.token().to_string(),
        })
    }

    /// Fetches a single project by full path or numeric ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the project does not exist.
    pub async fn get_project(&self, path: &str) -> Result<Project, ApiError> {
        let url = self.endpoint(&["projects", path]);
        self.get_json(url, &format!("project {path}")).await
    }

    /// Fetches a single group by full path or numeric ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the group does not exist.
    pub async fn get_group(&self, path: &str) -> Result<Group, ApiError> {
        let url = self.endpoint(&["groups", path]);
        self.get_json(url, &format!("group {path}")).await
    }

    /// Lists every project of a group, subgroups included.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if any page fails.
    pub async fn list_group_projects(&self, group: &str) -> Result<Vec<Project>, ApiError> {
        let mut url = self.endpoint(&["groups", group, "projects"]);
        url.query_pairs_mut()
            .append_pair("include_subgroups", "true");
        self.get_paginated(url, &format!("projects of group {group}"))
            .await
    }

    /// Lists every branch of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PermissionDenied`] or [`ApiError::NotFound`] if the
    /// token cannot read the repository.
    pub async fn list_branches(&self, project: &Project) -> Result<Vec<Branch>, ApiError> {
        let id = project.id.to_string();
        let url = self.endpoint(&["projects", &id, "repository", "branches"]);
        self.get_paginated(
            url,
            &format!("branches of project {}", project.path_with_namespace),
        )
        .await
    }

    /// Lists the merged merge requests of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PermissionDenied`] or [`ApiError::NotFound`] if the
    /// token cannot read merge requests.
    pub async fn list_merged_merge_requests(
        &self,
        project: &Project,
    ) -> Result<Vec<MergeRequest>, ApiError> {
        let id = project.id.to_string();
        let mut url = self.endpoint(&["projects", &id, "merge_requests"]);
        url.query_pairs_mut().append_pair("state", "merged");
        self.get_paginated(
            url,
            &format!("merge requests of project {}", project.path_with_namespace),
        )
        .await
    }

    /// Builds an API URL from path segments.
    ///
    /// Segments are percent-encoded individually, so `acme/backend` becomes
    /// `acme%2Fbackend` as GitLab expects for path identifiers.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetches and decodes a single JSON document.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, resource: &str) -> Result<T, ApiError> {
        let response = self.send(&url, resource).await?;
        decode(&url, response).await
    }

    /// Fetches every page of a listing, in order.
    async fn get_paginated<T: DeserializeOwned>(
        &self,
        url: Url,
        resource: &str,
    ) -> Result<Vec<T>, ApiError> {
        let mut items = Vec::new();
        let mut page = String::from("1");

        loop {
            let mut page_url = url.clone();
            page_url
                .query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page);

            let response = self.send(&page_url, resource).await?;
            let next = next_page(response.headers());
            let batch: Vec<T> = decode(&page_url, response).await?;
            items.extend(batch);

            match next {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(items)
    }

    /// Sends an authenticated GET and maps error statuses.
    async fn send(&self, url: &Url, resource: &str) -> Result<Response, ApiError> {
        debug!(url = %url, "GET");
        let response = self
            .http
            .get(url.clone())
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;
        check_status(response, resource)
    }
}

/// Maps an HTTP status onto the error taxonomy.
fn check_status(response: Response, resource: &str) -> Result<Response, ApiError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound {
            resource: resource.to_string(),
        }),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::PermissionDenied {
            resource: resource.to_string(),
        }),
        status => Err(ApiError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        }),
    }
}

/// Reads the next page number, if any.
fn next_page(headers: &HeaderMap) -> Option<String> {
    headers
        .get(NEXT_PAGE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

async fn decode<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
