//! vaultfetcher - Fetch branch-specific secrets from HashiCorp Vault.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultfetcher::cli::output;
use vaultfetcher::cli::{args, execute, Cli};
use vaultfetcher::core::constants::LOG_ENV;
use vaultfetcher::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse_from(args::normalize_args(std::env::args_os()));

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultfetcher=debug")
        } else {
            EnvFilter::new("vaultfetcher=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        report(&e);
        std::process::exit(1);
    }
}

fn report(e: &Error) {
    if let Some(issues) = e.validation_issues() {
        output::error(&format!(
            "configuration validation failed ({} issue{})",
            issues.len(),
            if issues.len() == 1 { "" } else { "s" }
        ));
        for issue in issues {
            output::issue(issue);
        }
        return;
    }

    output::error(&e.to_string());

    let suggestion = match e {
        Error::Config(ConfigError::ReadFile { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            Some("pass the definition file with --config <path>")
        }
        Error::Config(ConfigError::MissingVaultAddr | ConfigError::MissingVaultToken) => {
            Some("run with --validate to check the configuration without Vault")
        }
        _ => None,
    };
    if let Some(hint) = suggestion {
        output::hint(hint);
    }
}
