//! Pure set difference between a desired label set and a repository's current labels.

use std::collections::{HashMap, HashSet};

use crate::{Label, LabelSet};

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;

/// Returns the labels of `desired` whose name is not among `current_names`.
///
/// The result keeps the order of `desired`, including repeated names. Colors are never
/// compared.
pub fn labels_to_add<'a, I, S>(desired: &LabelSet, current_names: I) -> Vec<Label>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let existing: HashSet<&str> = current_names.into_iter().map(|name| name.as_ref()).collect();

    desired
        .iter()
        .filter(|label| !existing.contains(label.name.as_str()))
        .cloned()
        .collect()
}

/// Maps each label name to its color.
///
/// When a name appears more than once the last occurrence wins.
pub fn color_lookup(labels: &LabelSet) -> HashMap<&str, &str> {
    labels
        .iter()
        .map(|label| (label.name.as_str(), label.color.as_str()))
        .collect()
}
