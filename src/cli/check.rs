//! Validation-only mode.
//!
//! Reports, per secret, whether the active branch fetches from a target or
//! skips the store. No store is contacted.

use serde::Serialize;
use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::fetch::{plan, Decision};
use crate::core::resolve::Resolution;
use crate::error::Result;

#[derive(Serialize)]
struct Report<'a> {
    branch: &'a str,
    secrets: &'a [Decision],
}

/// Print the validation report for `branch`.
pub fn execute(config: &Config, branch: &str, json: bool) -> Result<()> {
    let decisions = plan(config, branch);

    for d in decisions.iter().filter(|d| !d.resolution.should_fetch()) {
        info!(secret = %d.secret, branch = %branch, "secret skips vault for branch");
    }
    info!(secrets = decisions.len(), "validation successful");

    if json {
        let report = Report {
            branch,
            secrets: &decisions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let title = if branch.is_empty() {
        "Secrets (no branch)".to_string()
    } else {
        format!("Secrets for branch {}", branch)
    };
    output::section(&title);

    for d in &decisions {
        match &d.resolution {
            Resolution::Fetch { target, source } => {
                output::fetch_row(&d.secret, &format!("{} ({})", target, source));
            }
            Resolution::Skip { source } => {
                output::skip_row(&d.secret, &format!("skipped ({})", source));
            }
        }
    }

    println!();
    output::success(&format!(
        "validation successful for {} secret{}",
        decisions.len(),
        if decisions.len() == 1 { "" } else { "s" }
    ));
    Ok(())
}
