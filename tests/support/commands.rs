//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Environment variables that would leak host state into a test run.
const HOST_VARS: &[&str] = &[
    "VAULT_ADDR",
    "VAULT_TOKEN",
    "VAULTFETCHER_LOG",
    "BAMBOO_PLAN_REPOSITORY_BRANCH",
    "BAMBOO_REPO_BRANCH",
    "BAMBOO_BRANCH_NAME",
    "GIT_BRANCH",
    "BRANCH_NAME",
];

impl Test {
    /// Create a vaultfetcher command isolated from the host environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test directory
    /// - Vault, branch and log variables removed
    /// - NO_COLOR set for stable output
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vaultfetcher").expect("failed to find vaultfetcher binary");
        for var in HOST_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `vaultfetcher --validate`.
    pub fn validate(&self) -> Output {
        self.cmd()
            .arg("--validate")
            .output()
            .expect("failed to run vaultfetcher --validate")
    }

    /// Shortcut for `vaultfetcher --validate --branch <branch>`.
    pub fn validate_branch(&self, branch: &str) -> Output {
        self.cmd()
            .args(["--validate", "--branch", branch])
            .output()
            .expect("failed to run vaultfetcher --validate")
    }

    /// Shortcut for `vaultfetcher --validate --json --branch <branch>`.
    pub fn validate_json(&self, branch: &str) -> Output {
        self.cmd()
            .args(["--validate", "--json", "--branch", branch])
            .output()
            .expect("failed to run vaultfetcher --validate --json")
    }

    /// Fetch against a Vault address that refuses connections.
    pub fn fetch_unreachable(&self, branch: &str) -> Output {
        self.cmd()
            .args(["--branch", branch, "--timeout", "5s"])
            .env("VAULT_ADDR", "http://127.0.0.1:1")
            .env("VAULT_TOKEN", "test-token")
            .output()
            .expect("failed to run vaultfetcher")
    }
}
