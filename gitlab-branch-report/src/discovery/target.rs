//! Interpretation of the path given on the command line.

use std::fmt;

/// What the user asked to report on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    /// A top-level group, e.g. "acme".
    Group(String),

    /// A single project, e.g. "acme/backend".
    Project(String),
}

impl ReportTarget {
    /// Classifies a path: anything containing `/` names a project, anything
    /// else a group.
    ///
    /// No further validation happens here; GitLab rejects malformed paths.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.trim().trim_matches('/');
        if path.contains('/') {
            Self::Project(path.to_string())
        } else {
            Self::Group(path.to_string())
        }
    }

    /// Returns the path as given (minus surrounding slashes).
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Group(path) | Self::Project(path) => path,
        }
    }
}

impl fmt::Display for ReportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(path) => write!(f, "group {path}"),
            Self::Project(path) => write!(f, "project {path}"),
        }
    }
}
