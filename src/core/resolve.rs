//! Branch-override resolution.
//!
//! Decides, for one secret and the active branch, whether the secret store
//! is queried and at which target. Assumes the secret passed validation.

use serde::Serialize;
use std::fmt;

use crate::core::constants::BRANCH_PREFIXES;
use crate::core::domain::{Secret, Target};

/// Which rule produced a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum Source {
    /// The secret's default target.
    Default,
    /// A branch override, by name.
    Override(String),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Default => write!(f, "default"),
            Source::Override(name) => write!(f, "override \"{}\"", name),
        }
    }
}

/// Outcome of resolving a secret for a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Resolution {
    /// Query the store at `target`.
    Fetch { target: Target, source: Source },
    /// Do not query the store for this branch.
    Skip { source: Source },
}

impl Resolution {
    /// Whether the store should be queried.
    pub fn should_fetch(&self) -> bool {
        matches!(self, Resolution::Fetch { .. })
    }

    /// The rule that decided this resolution.
    pub fn source(&self) -> &Source {
        match self {
            Resolution::Fetch { source, .. } | Resolution::Skip { source } => source,
        }
    }

    /// Resolved target and fetch flag; skipped resolutions carry an empty target.
    pub fn into_parts(self) -> (Target, bool) {
        match self {
            Resolution::Fetch { target, .. } => (target, true),
            Resolution::Skip { .. } => (Target::empty(), false),
        }
    }
}

/// Branch spellings tried against override names, in precedence order.
///
/// The trimmed branch comes first, followed by the branch with each known
/// prefix stripped when that prefix is present. A blank branch yields none.
pub fn branch_candidates(branch: &str) -> Vec<String> {
    let branch = branch.trim();
    if branch.is_empty() {
        return Vec::new();
    }

    let mut candidates = vec![branch.to_string()];
    for prefix in BRANCH_PREFIXES {
        if let Some(stripped) = branch.strip_prefix(prefix) {
            candidates.push(stripped.to_string());
        }
    }
    candidates
}

/// Resolve the target for `secret` on `branch`.
///
/// The first candidate that matches any override name wins; within a
/// candidate, overrides are scanned in declared order. Without a match the
/// default target is used when defined.
pub fn resolve_target(secret: &Secret, branch: &str) -> Resolution {
    let matched = branch_candidates(branch).into_iter().find_map(|candidate| {
        secret
            .branch_overrides
            .iter()
            .find(|o| o.name == candidate)
    });

    if let Some(o) = matched {
        let source = Source::Override(o.name.clone());
        if !o.enabled() || !o.vault.is_defined() {
            return Resolution::Skip { source };
        }
        return Resolution::Fetch {
            target: o.vault.clone(),
            source,
        };
    }

    let default = secret.default_target();
    if default.is_defined() {
        Resolution::Fetch {
            target: default.clone(),
            source: Source::Default,
        }
    } else {
        Resolution::Skip {
            source: Source::Default,
        }
    }
}
