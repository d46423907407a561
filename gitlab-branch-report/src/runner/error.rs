//! Runner error types.

/// Errors that abort a report run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Missing or invalid connection settings.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitLab API errors outside a single project's scope.
    #[error(transparent)]
    Api(#[from] crate::client::ApiError),

    /// Rendering or writing the report failed.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),
}
