use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the gitlabel CLI application.
///
/// This enum represents all possible error conditions that can arise during
/// CLI operations, including credential lookup failures, invalid arguments and
/// failures reported by the label synchronizer itself.
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub credentials could not be found or used.
    ///
    /// This error is returned when no token is available from the environment
    /// or the system keyring, or when the keyring cannot be accessed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// An environment setting has an invalid value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The GitHub client could not be created.
    #[error("GitHub client error: {0}")]
    GitHub(#[from] github_client::Error),

    /// Reading or writing the label set failed.
    #[error(transparent)]
    Sync(#[from] gitlabel_core::GitLabelError),
}

impl Error {
    /// The process exit code to report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArguments(_) => 2,
            _ => 1,
        }
    }
}
