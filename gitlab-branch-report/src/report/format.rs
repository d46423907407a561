//! Report formats and destinations.

use super::ParseFormatError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Standalone HTML page with links and filters.
    #[default]
    Html,

    /// Aligned plain-text table.
    Text,
}

impl ReportFormat {
    /// File written when no output path is given.
    #[must_use]
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Html => "gitlab_branch_report.html",
            Self::Text => "gitlab_branch_report.txt",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "text",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    /// Parses a CLI value: `-` means stdout, anything else a file path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}
