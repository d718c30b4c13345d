//! Command-line interface.

pub mod args;
pub mod check;
pub mod fetch;
pub mod output;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::core::config::Config;
use crate::core::{branch, constants};
use crate::error::Result;

/// vaultfetcher - Fetch branch-specific secrets from Vault.
#[derive(Parser, Debug)]
#[command(
    name = "vaultfetcher",
    about = "Fetch branch-specific secrets from HashiCorp Vault",
    version
)]
pub struct Cli {
    /// Path to the vault secrets definition file
    #[arg(long, default_value = constants::CONFIG_FILE)]
    pub config: PathBuf,

    /// Branch name used to resolve branch-overrides (defaults to CI variables)
    #[arg(long)]
    pub branch: Option<String>,

    /// Destination file for the received secrets
    #[arg(long, default_value = constants::OUTPUT_FILE)]
    pub output: PathBuf,

    /// Vault KV v2 mount path
    #[arg(long, default_value = constants::MOUNT_PATH)]
    pub mount: String,

    /// Field within the Vault secret to read
    #[arg(long, default_value = constants::PASSWORD_FIELD)]
    pub password_field: String,

    /// Vault address
    #[arg(long, env = "VAULT_ADDR")]
    pub vault_addr: Option<String>,

    /// Maximum duration for a single Vault request (e.g. 30s, 500ms, 1m30s)
    #[arg(long, default_value = "30s", value_parser = args::parse_duration)]
    pub timeout: Duration,

    /// Validate configuration without contacting Vault
    #[arg(long)]
    pub validate: bool,

    /// Print the validation report as JSON
    #[arg(long, requires = "validate")]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    let branch = branch::detect(cli.branch.as_deref());
    info!(branch = %branch, "resolved branch");

    if cli.validate {
        return check::execute(&config, &branch, cli.json);
    }

    let token = std::env::var("VAULT_TOKEN").ok();
    let opts = fetch::FetchOptions {
        vault_addr: cli.vault_addr.as_deref(),
        vault_token: token.as_deref(),
        mount: &cli.mount,
        password_field: &cli.password_field,
        timeout: cli.timeout,
        output: &cli.output,
    };
    fetch::execute(&config, &branch, &opts)
}
