//! Schema validation for the secrets definition file.
//!
//! Every rule is checked for every secret and override; problems are
//! accumulated and returned together as one [`ValidationError`].

use std::collections::HashSet;
use tracing::debug;

use crate::core::domain::{BranchOverride, Secret, Target};
use crate::error::ValidationError;

/// Validate a list of secrets.
///
/// Checks:
/// - At least one secret is declared
/// - Secret names are present and unique
/// - A defined default target is complete
/// - Each secret has a default target or at least one override
/// - Override names are present and unique within their secret
/// - Disabled overrides carry no target; enabled ones carry a complete
///   target that differs from the default
///
/// # Errors
///
/// Returns `ValidationError` listing every issue found.
pub fn validate(secrets: &[Secret]) -> Result<(), ValidationError> {
    debug!(secrets = secrets.len(), "validating secrets");

    if secrets.is_empty() {
        return Err(ValidationError::new(vec![
            "no vault_secrets entries defined".to_string(),
        ]));
    }

    let mut issues = Vec::new();
    let mut seen_names = HashSet::new();

    for (i, secret) in secrets.iter().enumerate() {
        let label = secret_label(secret, i);

        if secret.name.trim().is_empty() {
            issues.push(format!("secret at index {} is missing a name", i));
        } else if !seen_names.insert(secret.name.as_str()) {
            issues.push(format!(
                "duplicate secret name \"{}\" at index {}",
                secret.name, i
            ));
        }

        let default = secret.default_target();
        let has_default = default.is_defined();
        if has_default {
            check_complete(default, &format!("{} default", label), &mut issues);
        }

        if !has_default && secret.branch_overrides.is_empty() {
            issues.push(format!(
                "{} must define a default target or at least one branch override",
                label
            ));
        }

        check_overrides(secret, &label, &mut issues);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        debug!(issues = issues.len(), "validation failed");
        Err(ValidationError::new(issues))
    }
}

fn check_overrides(secret: &Secret, label: &str, issues: &mut Vec<String>) {
    let default = secret.default_target();
    let mut seen = HashSet::new();

    for (j, o) in secret.branch_overrides.iter().enumerate() {
        let o_label = override_label(o, j);

        if o.name.trim().is_empty() {
            issues.push(format!("{} override at index {} is missing a name", label, j));
        } else if !seen.insert(o.name.as_str()) {
            issues.push(format!(
                "{} has duplicate override for branch \"{}\" at index {}",
                label, o.name, j
            ));
        }

        if !o.enabled() {
            if o.vault.is_defined() {
                issues.push(format!(
                    "{} {} disables vault but defines a vault target",
                    label, o_label
                ));
            }
            continue;
        }

        if !o.vault.is_defined() {
            issues.push(format!(
                "{} {} must define a vault target when vault is enabled",
                label, o_label
            ));
            continue;
        }

        check_complete(&o.vault, &format!("{} {}", label, o_label), issues);

        if default.is_defined() && o.vault.same_location(default) {
            issues.push(format!(
                "{} {} must not match the default vault target",
                label, o_label
            ));
        }
    }
}

/// Report a defined-but-partial target.
fn check_complete(target: &Target, context: &str, issues: &mut Vec<String>) {
    let missing = target.missing_fields();
    if !missing.is_empty() {
        issues.push(format!("{}: {}", context, missing.join(", ")));
    }
}

fn secret_label(secret: &Secret, index: usize) -> String {
    if secret.name.trim().is_empty() {
        format!("secret at index {}", index)
    } else {
        format!("secret \"{}\"", secret.name)
    }
}

fn override_label(o: &BranchOverride, index: usize) -> String {
    if o.name.trim().is_empty() {
        format!("override at index {}", index)
    } else {
        format!("override \"{}\"", o.name)
    }
}
