//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub
//! label endpoints through the github_client crate. Every failure reported by octocrab is
//! translated into one of these variants so callers never need to depend on octocrab's
//! error type directly.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// This enum represents all possible error conditions when working with the GitHub API,
/// including authentication failures, API errors, rate limiting, and data processing issues.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.create_label(&repository, &payload).await {
///     Ok(label) => println!("Label created: {}", label.name),
///     Err(Error::ApiStatus { status, .. }) => eprintln!("GitHub answered with {}", status),
///     Err(Error::RateLimitExceeded { .. }) => eprintln!("Rate limit exceeded, retry later"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub answered a request with a non-success status code.
    ///
    /// The status code and the message from the GitHub error body are kept so the
    /// failure can be reported against the label or repository that caused it.
    #[error("GitHub API returned status {status}: {message}")]
    ApiStatus { status: u16, message: String },

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when the client cannot be built from the supplied
    /// credentials or when GitHub rejects them (401).
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The GitHub API returned a response in an unexpected format.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The repository reference is not of the form `owner/repo`.
    #[error("Invalid repository reference '{0}', expected owner/repo")]
    InvalidRepository(String),

    /// The requested resource was not found.
    ///
    /// GitHub answers 404 both for repositories that do not exist and for
    /// repositories the credentials are not allowed to see.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    ///
    /// GitHub signals this with either 403 or 429; `status` is the one it used.
    #[error("Rate limit exceeded (status {status})")]
    RateLimitExceeded { status: u16 },

    /// The request never produced a GitHub response (connection, URI, encoding problems).
    #[error("Failed to communicate with GitHub: {0}")]
    Transport(String),
}

impl Error {
    /// Returns the HTTP status code associated with this error, if GitHub produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiStatus { status, .. } => Some(*status),
            Error::NotFound => Some(404),
            Error::RateLimitExceeded { status } => Some(*status),
            _ => None,
        }
    }
}
