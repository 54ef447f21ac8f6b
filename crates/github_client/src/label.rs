//! Label domain types.
//!
//! This module contains the types exchanged with the GitHub label endpoints of a repository.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// A label as GitHub reports it for a repository.
///
/// GitHub returns more information than the label synchronizer needs. Only `name` and
/// `color` are guaranteed; the remaining fields are optional so that older or trimmed
/// responses still deserialize.
///
/// # Examples
///
/// ```
/// use github_client::RepositoryLabel;
///
/// let label: RepositoryLabel =
///     serde_json::from_str(r#"{"id": 1, "name": "bug", "color": "d73a4a"}"#).unwrap();
/// assert_eq!(label.name, "bug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryLabel {
    /// The GitHub ID of the label
    #[serde(default)]
    pub id: Option<u64>,

    /// The name of the label, unique within the repository
    pub name: String,

    /// The color of the label as a hex code without the leading `#`
    pub color: String,

    /// The description of the label
    #[serde(default)]
    pub description: Option<String>,

    /// Whether this is one of the labels GitHub creates for new repositories
    #[serde(default)]
    pub default: bool,
}

/// The body of a request that creates a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCreatePayload {
    pub name: String,
    pub color: String,
}

impl LabelCreatePayload {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}
