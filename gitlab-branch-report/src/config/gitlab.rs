//! Connection settings for a GitLab instance.

use super::ConfigError;
use std::fmt;
use url::Url;

/// Environment variable holding the personal access token.
pub const TOKEN_ENV: &str = "GITLAB_TOKEN";

/// Environment variable holding the GitLab base URL.
pub const URL_ENV: &str = "GITLAB_URL";

/// Base URL used when [`URL_ENV`] is not set.
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

/// Path of the REST API relative to the instance root.
const API_PATH: &str = "api/v4/";

/// Token and address of the GitLab instance to report on.
///
/// Built once at startup and handed to [`GitLabClient::new`].
///
/// [`GitLabClient::new`]: crate::client::GitLabClient::new
#[derive(Clone)]
pub struct GitLabConfig {
    base_url: Url,
    api_url: Url,
    token: String,
}

impl GitLabConfig {
    /// Creates a configuration from an explicit base URL and token.
    ///
    /// The token is checked first, so a missing token is reported even when
    /// the URL is also bad.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if `token` is absent or blank, and
    /// [`ConfigError::InvalidUrl`] / [`ConfigError::UnsupportedUrl`] if the
    /// base URL is unusable.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ConfigError> {
        let token = token
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let base_url = parse_base_url(base_url)?;
        let api_url = base_url
            .join(API_PATH)
            .map_err(|source| ConfigError::InvalidUrl {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            base_url,
            api_url,
            token,
        })
    }

    /// Reads the configuration from `GITLAB_TOKEN` and `GITLAB_URL`.
    ///
    /// # Errors
    ///
    /// See [`GitLabConfig::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV).ok();
        let base_url = std::env::var(URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GITLAB_URL.to_string());
        Self::new(&base_url, token)
    }

    /// Returns the instance root, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the REST API root (`{base}/api/v4/`).
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Returns the personal access token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for GitLabConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Parses the base URL and normalizes it to end with a slash so that joins
/// keep any relative root (e.g. `https://host/gitlab/`).
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::UnsupportedUrl {
            url: raw.to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_rejected() {
        let result = GitLabConfig::new(DEFAULT_GITLAB_URL, None);
        assert!(matches!(result, Err(ConfigError::MissingToken)));
    }

    #[test]
    fn blank_token_is_rejected() {
        let result = GitLabConfig::new(DEFAULT_GITLAB_URL, Some("   ".to_string()));
        assert!(matches!(result, Err(ConfigError::MissingToken)));
    }

    #[test]
    fn missing_token_wins_over_bad_url() {
        let result = GitLabConfig::new("not a url", None);
        assert!(matches!(result, Err(ConfigError::MissingToken)));
    }

    #[test]
    fn builds_api_url_from_root() {
        let config = GitLabConfig::new("https://gitlab.com", Some("t".to_string())).unwrap();
        assert_eq!(config.base_url().as_str(), "https://gitlab.com/");
        assert_eq!(config.api_url().as_str(), "https://gitlab.com/api/v4/");
    }

    #[test]
    fn keeps_relative_root() {
        let config =
            GitLabConfig::new("https://example.com/gitlab", Some("t".to_string())).unwrap();
        assert_eq!(
            config.api_url().as_str(),
            "https://example.com/gitlab/api/v4/"
        );
    }

    #[test]
    fn rejects_invalid_url() {
        let result = GitLabConfig::new("gitlab dot com", Some("t".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn rejects_non_http_url() {
        let result = GitLabConfig::new("ftp://gitlab.com", Some("t".to_string()));
        assert!(matches!(result, Err(ConfigError::UnsupportedUrl { .. })));
    }

    #[test]
    fn debug_output_hides_token() {
        let config = GitLabConfig::new(DEFAULT_GITLAB_URL, Some("secret".to_string())).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn from_env_requires_token() {
        temp_env::with_vars(
            [(TOKEN_ENV, None::<&str>), (URL_ENV, None::<&str>)],
            || {
                let result = GitLabConfig::from_env();
                assert!(matches!(result, Err(ConfigError::MissingToken)));
            },
        );
    }

    #[test]
    fn from_env_defaults_url() {
        temp_env::with_vars(
            [(TOKEN_ENV, Some("abc")), (URL_ENV, None::<&str>)],
            || {
                let config = GitLabConfig::from_env().unwrap();
                assert_eq!(config.token(), "abc");
                assert_eq!(config.base_url().as_str(), "https://gitlab.com/");
            },
        );
    }

    #[test]
    fn from_env_reads_custom_url() {
        temp_env::with_vars(
            [
                (TOKEN_ENV, Some("abc")),
                (URL_ENV, Some("https://gitlab.example.org")),
            ],
            || {
                let config = GitLabConfig::from_env().unwrap();
                assert_eq!(
                    config.api_url().as_str(),
                    "https://gitlab.example.org/api/v4/"
                );
            },
        );
    }
}
