//! GitHub credential and endpoint resolution.
//!
//! The token is looked up exactly once, at start-up, and only when a repository is
//! involved. The lookup order is:
//!
//! 1. The `GITHUB_TOKEN` environment variable
//! 2. The system keyring entry `gitlabel` / `github_token`
//!
//! `GITHUB_API_URL` optionally points the client at a GitHub Enterprise Server.
//! The resolved values are handed to the GitHub client explicitly; nothing below
//! this module reads the process environment.

use keyring::Entry;
use secrecy::SecretString;
use tracing::{debug, info, instrument};
use url::Url;

use crate::errors::Error;

pub const KEY_RING_SERVICE_NAME: &str = "gitlabel";
pub const KEY_RING_USER_TOKEN: &str = "github_token";
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;

/// Where the token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Environment,
    Keyring,
}

/// Everything needed to build an authenticated GitHub client.
#[derive(Debug)]
pub struct GitHubSettings {
    pub token: SecretString,
    pub token_source: TokenSource,
    pub api_url: Option<Url>,
}

impl GitHubSettings {
    /// Resolves the settings from the process environment and the system keyring.
    ///
    /// # Errors
    ///
    /// Returns `Error::Auth` if no token can be found and `Error::Config` if
    /// `GITHUB_API_URL` is set but is not a valid URL.
    #[instrument]
    pub fn from_environment() -> Result<Self, Error> {
        Self::resolve(&|name| std::env::var(name).ok(), &read_keyring_token)
    }

    /// Resolves the settings from the given lookups.
    ///
    /// Blank values are treated as missing.
    pub fn resolve(
        env: &dyn Fn(&str) -> Option<String>,
        keyring: &dyn Fn() -> Result<Option<String>, Error>,
    ) -> Result<Self, Error> {
        let api_url = match non_blank(env(API_URL_ENV_VAR)) {
            Some(raw) => Some(Url::parse(&raw).map_err(|e| {
                Error::Config(format!("{} is not a valid URL '{}': {}", API_URL_ENV_VAR, raw, e))
            })?),
            None => None,
        };

        if let Some(token) = non_blank(env(TOKEN_ENV_VAR)) {
            debug!(source = TOKEN_ENV_VAR, "Using GitHub token from the environment");
            return Ok(Self {
                token: SecretString::from(token),
                token_source: TokenSource::Environment,
                api_url,
            });
        }

        match non_blank(keyring()?) {
            Some(token) => {
                debug!("Using GitHub token from the system keyring");
                Ok(Self {
                    token: SecretString::from(token),
                    token_source: TokenSource::Keyring,
                    api_url,
                })
            }
            None => Err(Error::Auth(format!(
                "No GitHub token found. Set {} or store a token in the system keyring under service '{}', user '{}'.",
                TOKEN_ENV_VAR, KEY_RING_SERVICE_NAME, KEY_RING_USER_TOKEN
            ))),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads the token from the system keyring. A missing entry is not an error.
fn read_keyring_token() -> Result<Option<String>, Error> {
    let entry = Entry::new(KEY_RING_SERVICE_NAME, KEY_RING_USER_TOKEN)
        .map_err(|e| Error::Auth(format!("Failed to open the keyring entry: {}", e)))?;

    match entry.get_password() {
        Ok(token) => {
            info!("Found GitHub token in the system keyring");
            Ok(Some(token))
        }
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(Error::Auth(format!(
            "Failed to read the token from the keyring: {}",
            e
        ))),
    }
}
