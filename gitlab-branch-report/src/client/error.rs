//! GitLab API error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitLab API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The group, project or listing does not exist or is invisible to the token.
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// The token lacks read access.
    #[error("Permission denied: no read access to {resource}")]
    PermissionDenied { resource: String },

    /// Network or protocol failure.
    #[error("GitLab request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected HTTP status.
    #[error("GitLab returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Returns true for errors scoped to a single inaccessible resource.
    ///
    /// GitLab answers 404 for private projects the token cannot see, so
    /// not-found counts as an access error alongside permission denied.
    #[must_use]
    pub fn is_access_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::PermissionDenied { .. })
    }
}
