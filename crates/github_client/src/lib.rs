//! Crate for interacting with the label endpoints of the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub using an
//! explicitly supplied personal access token. Nothing in this crate reads credentials
//! from the process environment; callers resolve them and pass them in.

use async_trait::async_trait;
use octocrab::{Octocrab, Page, Result as OctocrabResult};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod label;
pub use label::{LabelCreatePayload, RepositoryLabel};

pub mod repository;
pub use repository::RepositoryRef;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The number of labels requested per page when listing a repository's labels.
pub const LABELS_PER_PAGE: u8 = 100;

/// Trait for the label operations the synchronizer needs from a remote repository.
///
/// The trait is the seam between the reconciliation logic and GitHub. Production code
/// uses [`GitHubClient`]; tests substitute an in-memory implementation.
#[async_trait]
pub trait LabelClient: Send + Sync {
    /// Lists every label currently defined for a repository.
    ///
    /// Implementations must follow pagination so that the returned list is complete.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if any page cannot be retrieved.
    async fn list_labels(&self, repository: &RepositoryRef) -> Result<Vec<RepositoryLabel>, Error>;

    /// Creates a single label in a repository.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] carrying the HTTP status when GitHub rejects the label,
    /// for instance 422 when a label with the same name already exists.
    async fn create_label(
        &self,
        repository: &RepositoryRef,
        payload: &LabelCreatePayload,
    ) -> Result<RepositoryLabel, Error>;
}

/// A client for interacting with the GitHub API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an already authenticated `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build the `Octocrab` instance from a token.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct ListLabelsQuery {
    per_page: u8,
}

#[async_trait]
impl LabelClient for GitHubClient {
    #[instrument(skip(self), fields(repository = %repository))]
    async fn list_labels(&self, repository: &RepositoryRef) -> Result<Vec<RepositoryLabel>, Error> {
        debug!("Requesting the first page of repository labels");

        let query = ListLabelsQuery {
            per_page: LABELS_PER_PAGE,
        };
        let first_page: OctocrabResult<Page<RepositoryLabel>> = self
            .client
            .get(repository.labels_route(), Some(&query))
            .await;

        let first_page = match first_page {
            Ok(p) => p,
            Err(e) => return Err(log_octocrab_error("Failed to list repository labels", e)),
        };

        let labels = self
            .client
            .all_pages(first_page)
            .await
            .map_err(|e| log_octocrab_error("Failed to retrieve all pages of labels", e))?;

        info!(count = labels.len(), "Retrieved repository labels");
        Ok(labels)
    }

    #[instrument(skip(self, payload), fields(repository = %repository, label = %payload.name))]
    async fn create_label(
        &self,
        repository: &RepositoryRef,
        payload: &LabelCreatePayload,
    ) -> Result<RepositoryLabel, Error> {
        let result: OctocrabResult<RepositoryLabel> = self
            .client
            .post(repository.labels_route(), Some(payload))
            .await;

        match result {
            Ok(label) => {
                info!(color = %label.color, "Created label");
                Ok(label)
            }
            Err(e) => Err(log_octocrab_error("Failed to create label", e)),
        }
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - The personal access token. It is only exposed while building the client.
/// * `base_uri` - An alternative API root, e.g. for GitHub Enterprise Server. When `None`
///   the public `https://api.github.com` endpoint is used.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URI is invalid or the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient};
/// use secrecy::SecretString;
///
/// # fn example() -> Result<(), github_client::Error> {
/// let token = SecretString::from("ghp_example".to_string());
/// let client = GitHubClient::new(create_token_client(&token, None)?);
/// # Ok(())
/// # }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &SecretString, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder();

    if let Some(uri) = base_uri {
        debug!(base_uri = uri, "Using custom GitHub API base URI");
        builder = builder.base_uri(uri).map_err(|e| {
            error!(base_uri = uri, error = %e, "Invalid GitHub API base URI");
            Error::AuthError(format!("Invalid GitHub API base URI '{}': {}", uri, e))
        })?;
    }

    builder
        .personal_token(token.expose_secret().to_string())
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to build Octocrab client with a personal token");
            Error::AuthError("Failed to build the GitHub client from the token.".to_string())
        })
}

/// Logs an octocrab failure and translates it into this crate's [`Error`].
fn log_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let status = source.status_code.as_u16();
            error!(
                status = status,
                error_message = %source.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );

            match status {
                401 => Error::AuthError(source.message.clone()),
                404 => Error::NotFound,
                429 => Error::RateLimitExceeded { status },
                403 if source.message.to_lowercase().contains("rate limit") => {
                    Error::RateLimitExceeded { status }
                }
                _ => Error::ApiStatus {
                    status,
                    message: source.message.clone(),
                },
            }
        }
        octocrab::Error::Json { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. The response could not be parsed.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::Serde { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. The response could not be deserialized.",
                message
            );
            Error::Deserialization(source)
        }
        octocrab::Error::UriParse { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to parse URI.",
                message
            );
            Error::Transport(source.to_string())
        }
        octocrab::Error::Uri { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}, Failed to parse URI.",
                message
            );
            Error::Transport(source.to_string())
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::Transport(e.to_string())
        }
    }
}
