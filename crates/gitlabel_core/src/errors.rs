//! Error types for label synchronization.

use std::{io, path::PathBuf};

use github_client::RepositoryRef;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Result type used throughout the label synchronizer.
pub type GitLabelResult<T> = Result<T, GitLabelError>;

/// Errors that stop a read or write of a label set.
///
/// Failures to create an individual label are not represented here. They are recorded
/// in the [`ReconcileReport`](crate::ReconcileReport) and the batch continues.
#[derive(Error, Debug)]
pub enum GitLabelError {
    /// A label file exists but its content is not a JSON array of `{name, color}` records.
    #[error("Failed to parse label file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A label file could not be read or written.
    #[error("Failed to access label file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Listing the labels of a repository failed.
    #[error("Failed to read labels from {repository}: {source}")]
    Remote {
        repository: RepositoryRef,
        #[source]
        source: github_client::Error,
    },

    /// The source or destination is neither a `.json` file nor an `owner/repo` reference.
    #[error("Invalid source or destination '{0}': expected a .json file or owner/repo")]
    InvalidEndpoint(String),

    /// A repository endpoint was used without a GitHub client to reach it.
    #[error("No GitHub credentials available to access {0}")]
    MissingCredentials(String),

    /// The operator could not be asked for confirmation.
    #[error("Failed to read the confirmation answer: {0}")]
    Prompt(String),

    /// Writing the report or listing to the console failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
