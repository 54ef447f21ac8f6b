//! Core of the gitlabel label synchronizer.
//!
//! A label set is read from a JSON label file or a GitHub repository and written to a
//! label file, the console or another repository. Writing to a repository is additive:
//! the [`Reconciler`] only creates labels the repository does not have yet, after the
//! operator confirms.
//!
//! ## Architecture
//!
//! - [`label`] holds the data model, [`endpoint`] decides where labels come from or go to
//! - [`label_file`] and [`console`] are plain format translation
//! - [`diff`] is the side-effect free set difference used by the [`Reconciler`]
//! - [`sync`] dispatches reads and writes to the right place
//!
//! Remote access goes through the [`github_client::LabelClient`] trait so that
//! everything here can be exercised without a network.

pub mod confirmation;
pub mod console;
pub mod diff;
pub mod endpoint;
pub mod errors;
pub mod label;
pub mod label_file;
pub mod reconciler;
pub mod sync;

#[cfg(test)]
mod test_support;

pub use confirmation::{parse_confirmation, PROMPT_SUFFIX};
pub use console::render_label_set;
pub use diff::{color_lookup, labels_to_add};
pub use endpoint::Endpoint;
pub use errors::{GitLabelError, GitLabelResult};
pub use label::{Label, LabelSet};
pub use label_file::{read_label_file, write_label_file};
pub use reconciler::{ConfirmFn, FailedLabel, ReconcileOutcome, ReconcileReport, Reconciler};
pub use sync::{read, write, WriteOutcome};
