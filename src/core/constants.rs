//! Constants used throughout vaultfetcher.
//!
//! Centralizes magic strings and default settings.

/// Default secrets definition file.
pub const CONFIG_FILE: &str = "vault_secrets.yaml";

/// Default destination for received secrets.
pub const OUTPUT_FILE: &str = "vault/vault_received.yaml";

/// Default Vault KV v2 mount path.
pub const MOUNT_PATH: &str = "secrets/sync";

/// Default field read from each Vault secret.
pub const PASSWORD_FIELD: &str = "password";

/// Path prefix under the mount where account secrets live.
pub const ACCOUNT_PATH_PREFIX: &str = "cyberark/accounts";

/// Branch prefixes stripped when matching overrides, in match order.
pub const BRANCH_PREFIXES: &[&str] = &["refs/heads/", "origin/"];

/// CI variables consulted, in order, when no branch flag is given.
pub const BRANCH_ENV_VARS: &[&str] = &[
    "BAMBOO_PLAN_REPOSITORY_BRANCH",
    "BAMBOO_REPO_BRANCH",
    "BAMBOO_BRANCH_NAME",
    "GIT_BRANCH",
    "BRANCH_NAME",
];

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "VAULTFETCHER_LOG";

/// Permissions applied to the output file on Unix.
pub const OUTPUT_MODE: u32 = 0o600;
