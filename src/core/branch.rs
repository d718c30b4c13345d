//! Active branch detection.
//!
//! The branch flag wins; otherwise well-known CI variables are consulted in
//! order. An empty result means only default targets apply.

use tracing::debug;

use crate::core::constants::BRANCH_ENV_VARS;
use crate::core::types::BranchName;

/// Detect the branch from the process environment.
pub fn detect(flag: Option<&str>) -> BranchName {
    detect_with(flag, |name| std::env::var(name).ok())
}

/// Detect the branch using `lookup` for environment access.
pub fn detect_with<F>(flag: Option<&str>, lookup: F) -> BranchName
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = flag.filter(|v| !v.trim().is_empty()) {
        debug!(source = "flag", "branch detected");
        return value.to_string();
    }

    for var in BRANCH_ENV_VARS {
        if let Some(value) = lookup(var) {
            let value = value.trim();
            if !value.is_empty() {
                debug!(source = %var, "branch detected");
                return value.to_string();
            }
        }
    }

    debug!("no branch detected");
    BranchName::new()
}
