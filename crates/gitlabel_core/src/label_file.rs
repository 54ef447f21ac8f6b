//! JSON label files.
//!
//! A label file holds a JSON array of `{"name": ..., "color": ...}` objects. Files are
//! written with four-space indentation so they stay easy to review and edit by hand.

use std::{fs, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info, instrument};

use crate::{GitLabelError, GitLabelResult, LabelSet};

#[cfg(test)]
#[path = "label_file_tests.rs"]
mod tests;

const INDENT: &[u8] = b"    ";

/// Reads a label set from a JSON label file.
///
/// # Errors
///
/// Returns [`GitLabelError::Io`] if the file cannot be read and
/// [`GitLabelError::Parse`] if it is not an array of `{name, color}` objects.
#[instrument]
pub fn read_label_file(path: &Path) -> GitLabelResult<LabelSet> {
    debug!("Reading label file");

    let content = fs::read_to_string(path).map_err(|e| GitLabelError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let labels: LabelSet = serde_json::from_str(&content).map_err(|e| GitLabelError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(count = labels.len(), "Read labels from file");
    Ok(labels)
}

/// Writes a label set to a JSON label file, replacing any existing content.
///
/// Returns the number of labels written.
///
/// # Errors
///
/// Returns [`GitLabelError::Io`] if the file cannot be written.
#[instrument(skip(labels), fields(count = labels.len()))]
pub fn write_label_file(path: &Path, labels: &LabelSet) -> GitLabelResult<usize> {
    let mut content = to_indented_json(labels).map_err(|e| GitLabelError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    content.push(b'\n');

    fs::write(path, content).map_err(|e| GitLabelError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Wrote labels to file");
    Ok(labels.len())
}

fn to_indented_json(labels: &LabelSet) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    labels.serialize(&mut serializer)?;
    Ok(buffer)
}
