//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building the GitLab connection settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The access token was not provided.
    #[error("GITLAB_TOKEN environment variable not set")]
    MissingToken,

    /// The GitLab base URL could not be parsed.
    #[error("Invalid GitLab URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The GitLab base URL is not an http(s) URL.
    #[error("Unsupported GitLab URL '{url}': expected an http or https address")]
    UnsupportedUrl { url: String },
}
