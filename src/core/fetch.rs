//! Fetch orchestration.
//!
//! Resolves every declared secret for the active branch and, outside of
//! validation mode, reads the resolved targets from a store one at a time.

use serde::Serialize;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::resolve::{resolve_target, Resolution};
use crate::core::store::SecretStore;
use crate::core::types::SecretName;
use crate::error::{Error, Result};

/// Resolution of one secret for the active branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub secret: SecretName,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// A value read from the store.
pub struct Fetched {
    pub name: SecretName,
    pub value: Zeroizing<String>,
}

impl std::fmt::Debug for Fetched {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetched")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl Fetched {
    /// Output line in `name=value` form.
    pub fn line(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("{}={}", self.name, self.value.as_str()))
    }
}

/// Resolve every secret without touching a store.
pub fn plan(config: &Config, branch: &str) -> Vec<Decision> {
    config
        .secrets()
        .iter()
        .map(|secret| Decision {
            secret: secret.name.clone(),
            resolution: resolve_target(secret, branch),
        })
        .collect()
}

/// Fetch `field` for every secret that resolves to a target.
///
/// Secrets are processed in declared order; skipped secrets are omitted
/// from the result.
///
/// # Errors
///
/// Returns `Error::Fetch` for the first secret that fails; later secrets
/// are not attempted.
pub fn fetch_all(
    config: &Config,
    branch: &str,
    store: &dyn SecretStore,
    field: &str,
) -> Result<Vec<Fetched>> {
    let mut fetched = Vec::with_capacity(config.secrets().len());

    for decision in plan(config, branch) {
        let Resolution::Fetch { target, source } = decision.resolution else {
            info!(
                secret = %decision.secret,
                branch = %branch,
                "skipping secret because vault is disabled"
            );
            continue;
        };

        debug!(secret = %decision.secret, store = store.name(), %source, "fetching");
        let value = store
            .fetch(&target, field)
            .map_err(|source| Error::Fetch {
                secret: decision.secret.clone(),
                source,
            })?;

        info!(
            secret = %decision.secret,
            namespace = %target.namespace,
            "retrieved secret"
        );
        fetched.push(Fetched {
            name: decision.secret,
            value,
        });
    }

    Ok(fetched)
}
