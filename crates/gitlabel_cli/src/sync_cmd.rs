//! The label copy command.
//!
//! Reads the label set named by `--infile` and writes it to the place named by
//! `--output`. A GitHub client is only created when one of the two is a repository,
//! so copying between files and the console never needs credentials.

use std::io::Write;

use github_client::{create_token_client, GitHubClient, LabelClient};
use gitlabel_core::{ConfirmFn, Endpoint, ReconcileOutcome, WriteOutcome};
use tracing::{debug, info, instrument};

use crate::{args::Cli, credentials::GitHubSettings, errors::Error};

#[cfg(test)]
#[path = "sync_cmd_tests.rs"]
mod tests;

/// How a run ended when no error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(WriteOutcome),

    /// The operator declined the confirmation prompt.
    Cancelled,
}

/// Runs one read/write cycle.
///
/// # Arguments
///
/// * `cli` - The parsed command-line flags
/// * `connect` - Builds the GitHub client; only called when a repository is involved
/// * `confirm` - Asks the operator before labels are created
/// * `out` - Receives listings and progress messages
///
/// # Errors
///
/// Returns `Error::InvalidArguments` without touching any file or the network when
/// `--infile` is empty. Other errors come from endpoint parsing, credential lookup or
/// the synchronizer.
#[instrument(skip(connect, confirm, out))]
pub async fn execute<F>(
    cli: &Cli,
    connect: F,
    confirm: &ConfirmFn<'_>,
    out: &mut dyn Write,
) -> Result<RunOutcome, Error>
where
    F: FnOnce() -> Result<Box<dyn LabelClient>, Error>,
{
    if cli.infile.trim().is_empty() {
        return Err(Error::InvalidArguments(
            "must specify -i or --infile".to_string(),
        ));
    }

    let source = Endpoint::parse(&cli.infile)?;
    let destination = Endpoint::parse(&cli.output)?;
    debug!(source = %source, destination = %destination, "Resolved endpoints");

    let client = if source.is_repository() || destination.is_repository() {
        Some(connect()?)
    } else {
        None
    };

    let labels = gitlabel_core::read(&source, client.as_deref()).await?;
    info!(count = labels.len(), "Label set loaded");

    let outcome =
        gitlabel_core::write(&labels, &destination, client.as_deref(), confirm, out).await?;

    match outcome {
        WriteOutcome::Repository(ReconcileOutcome::Cancelled) => Ok(RunOutcome::Cancelled),
        other => Ok(RunOutcome::Completed(other)),
    }
}

/// Builds a GitHub client from the credentials found in the environment or keyring.
pub fn connect_to_github() -> Result<Box<dyn LabelClient>, Error> {
    let settings = GitHubSettings::from_environment()?;
    info!(token_source = ?settings.token_source, "Connecting to GitHub");

    let octocrab = create_token_client(
        &settings.token,
        settings.api_url.as_ref().map(|u| u.as_str()),
    )?;
    Ok(Box::new(GitHubClient::new(octocrab)))
}
