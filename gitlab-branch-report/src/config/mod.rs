//! Configuration for connecting to GitLab.
//!
//! The only process-wide settings are the access token and the instance URL.
//! Both are read once and carried in a [`GitLabConfig`].

mod error;
mod gitlab;

pub use error::ConfigError;
pub use gitlab::{GitLabConfig, DEFAULT_GITLAB_URL, TOKEN_ENV, URL_ENV};
