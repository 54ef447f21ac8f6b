//! Reading a label set from, and writing it to, an [`Endpoint`].

use std::io::Write;

use github_client::LabelClient;
use tracing::{debug, info, instrument};

use crate::{
    console::render_label_set,
    label_file::{read_label_file, write_label_file},
    ConfirmFn, Endpoint, GitLabelError, GitLabelResult, LabelSet, ReconcileOutcome, Reconciler,
};

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;

/// What writing a label set did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The label file was replaced with this many labels.
    File { count: usize },

    /// The labels were listed on the console.
    Console,

    /// The labels were reconciled into a repository.
    Repository(ReconcileOutcome),
}

/// Reads a label set from a label file or a repository.
///
/// Repository labels are reduced to their name and color.
///
/// # Errors
///
/// - [`GitLabelError::Io`] / [`GitLabelError::Parse`] for unreadable or malformed files
/// - [`GitLabelError::Remote`] if the repository's labels cannot be listed
/// - [`GitLabelError::MissingCredentials`] for a repository source without a client
/// - [`GitLabelError::InvalidEndpoint`] for the console, which cannot be read from
#[instrument(skip(client), fields(source = %source))]
pub async fn read(source: &Endpoint, client: Option<&dyn LabelClient>) -> GitLabelResult<LabelSet> {
    match source {
        Endpoint::File(path) => read_label_file(path),
        Endpoint::Repository(repository) => {
            let client =
                client.ok_or_else(|| GitLabelError::MissingCredentials(repository.to_string()))?;

            debug!("Reading labels from repository");
            let labels = client
                .list_labels(repository)
                .await
                .map_err(|e| GitLabelError::Remote {
                    repository: repository.clone(),
                    source: e,
                })?;

            info!(count = labels.len(), "Read labels from repository");
            Ok(LabelSet::from(labels))
        }
        Endpoint::Console => Err(GitLabelError::InvalidEndpoint(source.to_string())),
    }
}

/// Writes a label set to a label file, the console or a repository.
///
/// Writing to a repository runs a [`Reconciler`], which asks for confirmation through
/// `confirm`. Progress and listings go to `out`.
///
/// # Errors
///
/// - [`GitLabelError::Io`] if the label file cannot be written
/// - [`GitLabelError::MissingCredentials`] for a repository destination without a client
/// - any error of [`Reconciler::reconcile`]
#[instrument(skip(labels, client, confirm, out), fields(destination = %destination, count = labels.len()))]
pub async fn write(
    labels: &LabelSet,
    destination: &Endpoint,
    client: Option<&dyn LabelClient>,
    confirm: &ConfirmFn<'_>,
    out: &mut dyn Write,
) -> GitLabelResult<WriteOutcome> {
    match destination {
        Endpoint::File(path) => {
            let count = write_label_file(path, labels)?;
            writeln!(out, "{} labels written to {}", count, path.display())?;
            Ok(WriteOutcome::File { count })
        }
        Endpoint::Console => {
            render_label_set(labels, out)?;
            Ok(WriteOutcome::Console)
        }
        Endpoint::Repository(repository) => {
            let client =
                client.ok_or_else(|| GitLabelError::MissingCredentials(repository.to_string()))?;

            let outcome = Reconciler::new(client, confirm)
                .reconcile(labels, repository, out)
                .await?;
            Ok(WriteOutcome::Repository(outcome))
        }
    }
}
