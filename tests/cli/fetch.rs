//! Tests for fetch mode that do not need a running Vault.

use crate::support::*;

#[test]
fn test_all_skipped_writes_empty_document() {
    let t = Test::with_config(BASIC);

    // every secret is disabled on dev, so Vault is never contacted
    let output = t.fetch_unreachable("dev");
    assert_success(&output);
    assert_stdout_contains(&output, "wrote 0 secrets");

    let lines = vault_lines(&t.read("vault/vault_received.yaml"));
    assert!(lines.is_empty());
}

#[test]
fn test_custom_output_path() {
    let t = Test::with_config(MAIN_ONLY);

    let output = t
        .cmd()
        .args(["--branch", "feature/x", "--output", "out/secrets.yaml"])
        .env("VAULT_ADDR", "http://127.0.0.1:1")
        .env("VAULT_TOKEN", "tok")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path("out/secrets.yaml").exists());
    assert!(!t.path("vault/vault_received.yaml").exists());
}

#[cfg(unix)]
#[test]
fn test_output_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_config(BASIC);

    let output = t.fetch_unreachable("dev");
    assert_success(&output);

    let mode = std::fs::metadata(t.path("vault/vault_received.yaml"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_store_failure_aborts_without_output() {
    let t = Test::with_config(BASIC);

    let output = t.fetch_unreachable("main");
    assert_failure(&output);
    assert_stderr_contains(&output, "fetch secret \"db_password\"");
    assert!(!t.path("vault/vault_received.yaml").exists());
}

#[test]
fn test_skip_is_logged() {
    let t = Test::with_config(BASIC);

    let output = t.fetch_unreachable("dev");
    assert_success(&output);
    assert_stderr_contains(&output, "skipping secret because vault is disabled");
}
