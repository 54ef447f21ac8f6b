//! Label and label set types.

use github_client::{LabelCreatePayload, RepositoryLabel};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// A named, colored label.
///
/// Two labels with the same name are the same label as far as reconciliation is
/// concerned; the color is carried along but never compared. Unknown fields are ignored
/// when a label is read from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,

    /// The color of the label as a hex code without `#`. Not validated locally.
    pub color: String,
}

impl Label {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

impl From<RepositoryLabel> for Label {
    fn from(value: RepositoryLabel) -> Self {
        Self {
            name: value.name,
            color: value.color,
        }
    }
}

impl From<&Label> for LabelCreatePayload {
    fn from(value: &Label) -> Self {
        LabelCreatePayload::new(value.name.clone(), value.color.clone())
    }
}

/// An ordered collection of labels.
///
/// Order is kept for display and for the order in which labels are created. Duplicate
/// names are kept as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(Vec<Label>);

impl LabelSet {
    pub fn new(labels: Vec<Label>) -> Self {
        Self(labels)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.0.iter()
    }

    pub fn labels(&self) -> &[Label] {
        &self.0
    }

    /// The label names in order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|l| l.name.as_str()).collect()
    }
}

impl From<Vec<Label>> for LabelSet {
    fn from(value: Vec<Label>) -> Self {
        Self(value)
    }
}

impl From<Vec<RepositoryLabel>> for LabelSet {
    fn from(value: Vec<RepositoryLabel>) -> Self {
        Self(value.into_iter().map(Label::from).collect())
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<T: IntoIterator<Item = Label>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LabelSet {
    type Item = Label;
    type IntoIter = std::vec::IntoIter<Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
