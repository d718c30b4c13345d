//! Target type.
//!
//! A location in the secret store: an account identifier inside a namespace.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::null_as_default;
use crate::core::types::{AccountId, Namespace};

/// Where a secret's value lives in the secret store.
///
/// The legacy `namepsace` spelling is folded into `namespace` while
/// deserializing, so the alias is never visible past the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTarget")]
pub struct Target {
    pub account_id: AccountId,
    pub namespace: Namespace,
}

/// Wire form of a target, before alias folding.
#[derive(Debug, Default, Deserialize)]
struct RawTarget {
    #[serde(default, deserialize_with = "null_as_default")]
    account_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    namespace: String,
    #[serde(default, rename = "namepsace", deserialize_with = "null_as_default")]
    namespace_alias: String,
}

impl From<RawTarget> for Target {
    fn from(raw: RawTarget) -> Self {
        let namespace = if raw.namespace.is_empty() {
            raw.namespace_alias
        } else {
            raw.namespace
        };
        Self {
            account_id: raw.account_id,
            namespace,
        }
    }
}

impl Target {
    /// Create a target from its two fields.
    pub fn new(account_id: impl Into<AccountId>, namespace: impl Into<Namespace>) -> Self {
        Self {
            account_id: account_id.into(),
            namespace: namespace.into(),
        }
    }

    /// The empty target, returned when nothing should be fetched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// At least one field is non-blank.
    pub fn is_defined(&self) -> bool {
        !self.account_id.trim().is_empty() || !self.namespace.trim().is_empty()
    }

    /// Both fields are non-blank.
    pub fn is_valid(&self) -> bool {
        !self.account_id.trim().is_empty() && !self.namespace.trim().is_empty()
    }

    /// Same account and namespace, ignoring surrounding whitespace.
    pub fn same_location(&self, other: &Target) -> bool {
        self.account_id.trim() == other.account_id.trim()
            && self.namespace.trim() == other.namespace.trim()
    }

    /// Field-level problems that keep this target from being valid.
    ///
    /// Empty when the target is valid.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.account_id.trim().is_empty() {
            missing.push("account_id is required");
        }
        if self.namespace.trim().is_empty() {
            missing.push("namespace is required");
        }
        missing
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.account_id)
    }
}
