//! Error types for vaultfetcher.
//!
//! Errors are grouped by the layer that produces them. Schema problems are
//! collected into a single [`ValidationError`] so that one run reports every
//! issue in the document.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A store failure attributed to the secret being fetched.
    #[error("fetch secret \"{secret}\": {source}")]
    Fetch {
        secret: String,
        #[source]
        source: StoreError,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is a schema validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Issues carried by a validation failure, if this is one.
    pub fn validation_issues(&self) -> Option<&[String]> {
        match self {
            Error::Validation(v) => Some(v.issues()),
            _ => None,
        }
    }
}

/// Configuration loading and command-line settings errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to serialize output: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write output {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("VAULT_ADDR environment variable or --vault-addr flag must be provided")]
    MissingVaultAddr,

    #[error("invalid vault address '{0}': expected an http:// or https:// URL")]
    InvalidVaultAddr(String),

    #[error("VAULT_TOKEN environment variable must be provided")]
    MissingVaultToken,

    #[error("mount path cannot be empty")]
    EmptyMountPath,
}

/// Aggregated schema validation failure.
///
/// Holds every issue found in one pass over the document, in discovery order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("configuration validation failed: {}", .issues.join("; "))]
pub struct ValidationError {
    issues: Vec<String>,
}

impl ValidationError {
    /// Wrap a non-empty list of issues.
    pub fn new(issues: Vec<String>) -> Self {
        debug_assert!(!issues.is_empty(), "validation error without issues");
        Self { issues }
    }

    /// Issues in the order they were found.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Consume the error, returning the issue list.
    pub fn into_issues(self) -> Vec<String> {
        self.issues
    }
}

/// Secret store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret not found at {path} (namespace {namespace})")]
    NotFound { path: String, namespace: String },

    #[error("field \"{field}\" missing in secret {path}")]
    FieldMissing { field: String, path: String },

    #[error("field \"{field}\" in secret {path} is not a string")]
    FieldNotString { field: String, path: String },

    #[error("field \"{field}\" in secret {path} is empty")]
    EmptyValue { field: String, path: String },

    #[error("access to {path} rejected (namespace {namespace}): {message}")]
    Rejected {
        path: String,
        namespace: String,
        message: String,
    },

    #[error("request for {path} timed out after {timeout_ms}ms")]
    Timeout { path: String, timeout_ms: u128 },

    #[error("read secret at {path} (namespace {namespace}): {message}")]
    Backend {
        path: String,
        namespace: String,
        message: String,
    },

    #[error("failed to create vault client: {0}")]
    Client(String),

    #[error("failed to create runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
