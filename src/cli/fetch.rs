//! Fetch mode.
//!
//! Reads every resolved secret from Vault and writes the output document.

use std::path::Path;
use std::time::Duration;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::fetch::fetch_all;
use crate::core::output as document;
use crate::core::store::{SecretStore, Vault, VaultSettings};
use crate::error::Result;

/// Options for a fetch run.
pub struct FetchOptions<'a> {
    pub vault_addr: Option<&'a str>,
    pub vault_token: Option<&'a str>,
    pub mount: &'a str,
    pub password_field: &'a str,
    pub timeout: Duration,
    pub output: &'a Path,
}

/// Fetch from Vault and write the output file.
pub fn execute(config: &Config, branch: &str, opts: &FetchOptions<'_>) -> Result<()> {
    let settings = VaultSettings::new(opts.vault_addr, opts.vault_token, opts.mount, opts.timeout)?;
    let store = Vault::new(settings)?;
    run(config, branch, &store, opts)
}

/// Fetch from any store and write the output file.
pub fn run(
    config: &Config,
    branch: &str,
    store: &dyn SecretStore,
    opts: &FetchOptions<'_>,
) -> Result<()> {
    let fetched = fetch_all(config, branch, store, opts.password_field)?;
    document::write(opts.output, &fetched)?;

    tracing::info!(
        secrets = fetched.len(),
        path = %opts.output.display(),
        "wrote secrets"
    );
    output::success(&format!(
        "wrote {} secret{} to {}",
        fetched.len(),
        if fetched.len() == 1 { "" } else { "s" },
        output::path(&opts.output.display().to_string())
    ));
    Ok(())
}
