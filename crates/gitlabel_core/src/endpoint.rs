//! Where a label set is read from or written to.

use std::{fmt, path::PathBuf};

use github_client::RepositoryRef;

use crate::{GitLabelError, GitLabelResult};

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;

/// The file extension that selects the structured file format.
pub const LABEL_FILE_EXTENSION: &str = ".json";

/// A source or destination of a label set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A JSON label file.
    File(PathBuf),

    /// The label collection of a GitHub repository.
    Repository(RepositoryRef),

    /// The console. Only meaningful as a destination.
    Console,
}

impl Endpoint {
    /// Classifies a reference given on the command line.
    ///
    /// References ending in `.json` (any case) are files, empty references are the
    /// console and everything else must be an `owner/repo` reference.
    ///
    /// # Errors
    ///
    /// Returns [`GitLabelError::InvalidEndpoint`] when the reference is neither.
    pub fn parse(reference: &str) -> GitLabelResult<Self> {
        let trimmed = reference.trim();

        if trimmed.is_empty() {
            return Ok(Endpoint::Console);
        }

        if trimmed.to_lowercase().ends_with(LABEL_FILE_EXTENSION) {
            return Ok(Endpoint::File(PathBuf::from(trimmed)));
        }

        trimmed
            .parse::<RepositoryRef>()
            .map(Endpoint::Repository)
            .map_err(|_| GitLabelError::InvalidEndpoint(trimmed.to_string()))
    }

    pub fn is_repository(&self) -> bool {
        matches!(self, Endpoint::Repository(_))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::File(path) => write!(f, "{}", path.display()),
            Endpoint::Repository(repository) => write!(f, "{}", repository),
            Endpoint::Console => write!(f, "console"),
        }
    }
}
