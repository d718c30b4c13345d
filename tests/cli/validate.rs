//! Tests for validation-only mode.

use crate::support::*;

#[test]
fn test_validate_reports_every_secret() {
    let t = Test::with_config(BASIC);

    let output = t.validate();
    assert_success(&output);
    assert_stdout_contains(&output, "db_password");
    assert_stdout_contains(&output, "api_key");
    assert_stdout_contains(&output, "team/prod/1001 (default)");
    assert_stdout_contains(&output, "validation successful for 2 secrets");
}

#[test]
fn test_validate_shows_skips_for_disabled_branch() {
    let t = Test::with_config(BASIC);

    let output = t.validate_branch("dev");
    assert_success(&output);
    assert_stdout_contains(&output, "skipped (override \"dev\")");
    assert_stderr_contains(&output, "secret skips vault for branch");
}

#[test]
fn test_validate_strips_origin_prefix() {
    let t = Test::with_config(BASIC);

    let output = t.validate_branch("origin/qa");
    assert_success(&output);
    assert_stdout_contains(&output, "team/qa/2001 (override \"qa\")");
}

#[test]
fn test_validate_does_not_need_vault() {
    let t = Test::with_config(BASIC);

    // no VAULT_ADDR / VAULT_TOKEN in the environment
    let output = t.validate();
    assert_success(&output);
    assert!(!t.path("vault/vault_received.yaml").exists());
}

#[test]
fn test_validate_json_report() {
    let t = Test::with_config(BASIC);

    let output = t.validate_json("refs/heads/dev");
    assert_success(&output);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["branch"], "refs/heads/dev");
    let secrets = report["secrets"].as_array().unwrap();
    assert_eq!(secrets.len(), 2);
    assert_eq!(secrets[0]["secret"], "db_password");
    assert_eq!(secrets[0]["action"], "skip");
    assert_eq!(secrets[1]["action"], "skip");
}

#[test]
fn test_branch_from_ci_environment() {
    let t = Test::with_config(MAIN_ONLY);

    let output = t
        .cmd()
        .args(["--validate", "--json"])
        .env("GIT_BRANCH", "origin/main")
        .output()
        .unwrap();
    assert_success(&output);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["branch"], "origin/main");
    assert_eq!(report["secrets"][0]["action"], "fetch");
    assert_eq!(report["secrets"][0]["target"]["account_id"], "3001");
}

#[test]
fn test_branch_flag_beats_environment() {
    let t = Test::with_config(MAIN_ONLY);

    let output = t
        .cmd()
        .args(["--validate", "--json", "--branch", "feature/x"])
        .env("BRANCH_NAME", "main")
        .output()
        .unwrap();
    assert_success(&output);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["secrets"][0]["action"], "skip");
}

#[test]
fn test_single_dash_long_flags() {
    let t = Test::new();
    t.write("conf/secrets.yaml", BASIC);

    let output = t
        .cmd()
        .args(["-config", "conf/secrets.yaml", "-validate", "-branch", "qa"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "team/qa/2001");
}
