//! Secret and branch override types.

use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::target::Target;
use crate::core::types::{BranchName, SecretName};

/// A declared secret and the rules for locating it per branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: SecretName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default: DefaultTarget,
    #[serde(
        default,
        rename = "branch-overrides",
        deserialize_with = "null_as_default"
    )]
    pub branch_overrides: Vec<BranchOverride>,
}

/// The `default:` block, which nests its target under `vault:`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultTarget {
    #[serde(default, deserialize_with = "null_as_default")]
    pub vault: Target,
}

/// Substitutes another target, or disables lookup, for one branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOverride {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: BranchName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vault: Target,
    /// Absent means enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_enabled: Option<bool>,
}

impl Secret {
    /// Default target for this secret (may be undefined).
    pub fn default_target(&self) -> &Target {
        &self.default.vault
    }

    /// Builder-style helper used by tests and programmatic callers.
    pub fn new(name: impl Into<SecretName>, default: Target) -> Self {
        Self {
            name: name.into(),
            default: DefaultTarget { vault: default },
            branch_overrides: Vec::new(),
        }
    }

    /// Append a branch override.
    pub fn with_override(mut self, o: BranchOverride) -> Self {
        self.branch_overrides.push(o);
        self
    }
}

impl BranchOverride {
    /// Effective `vault_enabled`: absent is treated as `true`.
    pub fn enabled(&self) -> bool {
        self.vault_enabled.unwrap_or(true)
    }

    /// Override pointing the branch at another target.
    pub fn target(name: impl Into<BranchName>, vault: Target) -> Self {
        Self {
            name: name.into(),
            vault,
            vault_enabled: None,
        }
    }

    /// Override that opts the branch out of lookup.
    pub fn disabled(name: impl Into<BranchName>) -> Self {
        Self {
            name: name.into(),
            vault: Target::empty(),
            vault_enabled: Some(false),
        }
    }
}
