//! Secrets definition file management.
//!
//! Handles reading, parsing and validating `vault_secrets.yaml`. A loaded
//! [`Config`] has already passed schema validation and is read-only.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::domain::{null_as_default, Secret};
use crate::core::validation;
use crate::error::{ConfigError, Result, ValidationError};

/// Root of the secrets definition file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Declared secrets, in file order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vault_secrets: Vec<Secret>,
}

impl Config {
    /// Load and validate a definition file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// `ConfigError::Parse` if the YAML is malformed, or
    /// `Error::Validation` listing every schema issue.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents)
    }

    /// Parse and validate a definition document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `Error::Validation`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents).map_err(ConfigError::Parse)?;

        debug!(secrets = config.vault_secrets.len(), "config parsed");

        config.validate()?;
        Ok(config)
    }

    /// Run schema validation over the whole document.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` with every issue found.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validation::validate(&self.vault_secrets)
    }

    /// Declared secrets, in file order.
    pub fn secrets(&self) -> &[Secret] {
        &self.vault_secrets
    }
}
