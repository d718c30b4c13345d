//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: skipped secrets
//! - Cyan: paths, secret names, hints
//! - Bold: headers
//! - Dimmed: secondary info
//!
//! Results go to stdout; errors and hints go to stderr.

use console::style;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ wrote 3 secrets to vault/vault_received.yaml`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ mount path cannot be empty`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print one validation issue to stderr.
///
/// Example: `  • secret "db" override "dev" disables vault but defines a vault target`
pub fn issue(msg: &str) {
    eprintln!("  • {}", msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ pass --config <path>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header with a separator line.
pub fn section(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", title);
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a secret that will be fetched.
///
/// Example: `  ✓ db_password  team/prod/1001 (default)`
pub fn fetch_row(name: &str, detail: &str) {
    if colors_enabled() {
        println!(
            "  {} {}  {}",
            style("✓").green(),
            style(name).cyan(),
            detail
        );
    } else {
        println!("  ✓ {}  {}", name, detail);
    }
}

/// Print a secret that will be skipped.
///
/// Example: `  - api_key  skipped (override "dev")`
pub fn skip_row(name: &str, detail: &str) {
    if colors_enabled() {
        println!(
            "  {} {}  {}",
            style("-").yellow(),
            style(name).cyan(),
            style(detail).dim()
        );
    } else {
        println!("  - {}  {}", name, detail);
    }
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}
