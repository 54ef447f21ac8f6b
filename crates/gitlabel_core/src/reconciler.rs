//! Additive reconciliation of a repository's labels with a desired label set.
//!
//! This module provides the [`Reconciler`], which fetches the labels a repository already
//! has, works out which labels of the desired set are missing, asks the operator to
//! confirm and then creates the missing labels one at a time.

use std::io::Write;

use github_client::{LabelClient, LabelCreatePayload, RepositoryRef};
use tracing::{info, instrument, warn};

use crate::{
    diff::{color_lookup, labels_to_add},
    GitLabelError, GitLabelResult, LabelSet,
};

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;

/// Asks the operator a yes/no question and returns whether the answer was yes.
pub type ConfirmFn<'a> = dyn Fn(&str) -> GitLabelResult<bool> + 'a;

/// Creates the labels of a desired set that a repository does not have yet.
///
/// Reconciliation is additive only. Existing labels are never updated or removed, even
/// when their color differs from the desired one.
///
/// # Examples
///
/// ```rust,no_run
/// use github_client::{GitHubClient, RepositoryRef};
/// use gitlabel_core::{LabelSet, Reconciler};
///
/// # async fn example(client: GitHubClient, labels: LabelSet) -> gitlabel_core::GitLabelResult<()> {
/// let confirm = |_prompt: &str| -> gitlabel_core::GitLabelResult<bool> { Ok(true) };
/// let reconciler = Reconciler::new(&client, &confirm);
///
/// let repository: RepositoryRef = "my-org/my-repo".parse().unwrap();
/// let outcome = reconciler
///     .reconcile(&labels, &repository, &mut std::io::stdout())
///     .await?;
/// println!("{:?}", outcome);
/// # Ok(())
/// # }
/// ```
pub struct Reconciler<'a> {
    client: &'a dyn LabelClient,
    confirm: &'a ConfirmFn<'a>,
}

impl<'a> Reconciler<'a> {
    /// Creates a new Reconciler.
    ///
    /// # Arguments
    ///
    /// * `client` - Lists and creates labels on the remote repository
    /// * `confirm` - Called with the prompt text before anything is created
    pub fn new(client: &'a dyn LabelClient, confirm: &'a ConfirmFn<'a>) -> Self {
        Self { client, confirm }
    }

    /// Brings `repository` up to date with `labels`.
    ///
    /// # Behavior
    ///
    /// 1. Lists the labels currently defined in the repository
    /// 2. Selects the desired labels whose name is not defined yet
    /// 3. Returns [`ReconcileOutcome::NothingToDo`] if there are none
    /// 4. Shows the missing names and asks for confirmation, returning
    ///    [`ReconcileOutcome::Cancelled`] unless the answer is yes
    /// 5. Creates each missing label in order, reporting every outcome
    ///
    /// # Errors
    ///
    /// Returns [`GitLabelError::Remote`] if the current labels cannot be listed. No label
    /// is created in that case. Failures to create individual labels are not errors;
    /// they are recorded in the [`ReconcileReport`]. Output failures after confirmation are
    /// logged and do not stop the remaining creation requests.
    #[instrument(skip(self, labels, out), fields(repository = %repository, desired = labels.len()))]
    pub async fn reconcile(
        &self,
        labels: &LabelSet,
        repository: &RepositoryRef,
        out: &mut dyn Write,
    ) -> GitLabelResult<ReconcileOutcome> {
        let current = self
            .client
            .list_labels(repository)
            .await
            .map_err(|e| GitLabelError::Remote {
                repository: repository.clone(),
                source: e,
            })?;

        let to_add = labels_to_add(labels, current.iter().map(|l| &l.name));
        info!(
            current = current.len(),
            missing = to_add.len(),
            "Compared desired labels with repository"
        );

        if to_add.is_empty() {
            writeln!(out, "No new labels to add to {}.", repository)?;
            return Ok(ReconcileOutcome::NothingToDo);
        }

        let names: Vec<&str> = to_add.iter().map(|l| l.name.as_str()).collect();
        writeln!(out, "NEW LABELS TO ADD: {}", names.join(", "))?;
        out.flush()?;

        let prompt = format!(
            "{} LABELS WILL BE ADDED TO {}. PROCEED?",
            to_add.len(),
            repository.to_string().to_uppercase()
        );
        if !(self.confirm)(&prompt)? {
            info!("Operator declined, no labels created");
            return Ok(ReconcileOutcome::Cancelled);
        }

        let colors = color_lookup(labels);
        let mut report = ReconcileReport::new();

        for label in &to_add {
            let color = colors
                .get(label.name.as_str())
                .copied()
                .unwrap_or(label.color.as_str());
            let payload = LabelCreatePayload::new(label.name.as_str(), color);

            match self.client.create_label(repository, &payload).await {
                Ok(_) => {
                    info!(label = %label.name, "Label added");
                    report_progress(out, format_args!("Label added: {}", label.name));
                    report.added.push(label.name.clone());
                }
                Err(e) => {
                    warn!(label = %label.name, error = ?e, "Failed to add label");
                    let reason = match e.status() {
                        Some(status) => status.to_string(),
                        None => e.to_string(),
                    };
                    report_progress(
                        out,
                        format_args!("ERROR ({}) adding label: {}", reason, label.name),
                    );
                    report.failed.push(FailedLabel {
                        name: label.name.clone(),
                        status: e.status(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            added = report.added.len(),
            failed = report.failed.len(),
            "Label reconciliation complete"
        );

        Ok(ReconcileOutcome::Applied(report))
    }
}

/// Writes one progress line of a creation batch.
///
/// Once creation has started the batch must run to the end, so a failing output only
/// gets logged.
fn report_progress(out: &mut dyn Write, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line) {
        warn!(error = %e, "Failed to write progress line");
    }
}

/// What a reconciliation run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Every desired label already existed. Nothing was created.
    NothingToDo,

    /// The operator did not confirm. Nothing was created.
    Cancelled,

    /// Creation requests were issued for the missing labels.
    Applied(ReconcileReport),
}

/// Per-label results of the creation requests of one reconciliation run.
///
/// Both lists are in the order the requests were made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Names of the labels that were created
    pub added: Vec<String>,

    /// Labels GitHub refused to create
    pub failed: Vec<FailedLabel>,
}

impl ReconcileReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no creation request failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Returns true if at least one label was created.
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
    }

    /// The closing line printed after a creation batch.
    pub fn summary(&self) -> String {
        format!(
            "{} labels added, {} failed",
            self.added.len(),
            self.failed.len()
        )
    }
}

/// A label that could not be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedLabel {
    pub name: String,

    /// The HTTP status GitHub answered with, if the request reached GitHub
    pub status: Option<u16>,

    pub reason: String,
}
