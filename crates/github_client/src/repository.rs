//! Repository references.
//!
//! Label operations address a repository through an `owner/repo` string. This module
//! parses and validates that string once so the rest of the code can rely on both parts
//! being present.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::Error;

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

static REPOSITORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<owner>[A-Za-z0-9_-]+)/(?P<name>[A-Za-z0-9._-]+)$")
        .expect("repository pattern is a valid regex")
});

/// A reference to a GitHub repository, i.e. the `owner/repo` pair.
///
/// # Examples
///
/// ```
/// use github_client::RepositoryRef;
///
/// let repository: RepositoryRef = "octocat/Hello-World".parse().unwrap();
/// assert_eq!(repository.owner(), "octocat");
/// assert_eq!(repository.name(), "Hello-World");
/// assert_eq!(repository.to_string(), "octocat/Hello-World");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    /// Creates a reference from its two parts, validating them together.
    pub fn new(owner: &str, name: &str) -> Result<Self, Error> {
        format!("{owner}/{name}").parse()
    }

    /// The user or organization that owns the repository.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The REST route of the label collection of this repository.
    pub fn labels_route(&self) -> String {
        format!("/repos/{}/{}/labels", self.owner, self.name)
    }
}

impl FromStr for RepositoryRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let captures = REPOSITORY_PATTERN
            .captures(trimmed)
            .ok_or_else(|| Error::InvalidRepository(trimmed.to_string()))?;

        let name = &captures["name"];
        if name == "." || name == ".." {
            return Err(Error::InvalidRepository(trimmed.to_string()));
        }

        Ok(Self {
            owner: captures["owner"].to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
