//! HashiCorp Vault KV v2 backend.
//!
//! Each target's `account_id` selects the secret at
//! `cyberark/accounts/<account_id>` under the configured mount, and its
//! `namespace` selects the Vault Enterprise namespace for the request.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, trace};
use vaultrs::client::{VaultClient, VaultClientSettingsBuilder};
use vaultrs::error::ClientError;
use vaultrs::kv2;
use zeroize::Zeroizing;

use super::{Result, SecretStore};
use crate::core::constants::ACCOUNT_PATH_PREFIX;
use crate::core::domain::Target;
use crate::error::{ConfigError, StoreError};

/// Connection settings for [`Vault`].
#[derive(Clone)]
pub struct VaultSettings {
    /// Server address (e.g., "https://vault.example.com:8200")
    pub address: String,
    /// Authentication token
    pub token: Zeroizing<String>,
    /// KV v2 mount path, already normalized
    pub mount: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for VaultSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSettings")
            .field("address", &self.address)
            .field("token", &"[REDACTED]")
            .field("mount", &self.mount)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl VaultSettings {
    /// Build settings from raw flag/environment values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the address, token or mount is blank, or the
    /// address is not an http(s) URL.
    pub fn new(
        address: Option<&str>,
        token: Option<&str>,
        mount: &str,
        timeout: Duration,
    ) -> std::result::Result<Self, ConfigError> {
        let address = address
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or(ConfigError::MissingVaultAddr)?;
        if !(address.starts_with("http://") || address.starts_with("https://")) {
            return Err(ConfigError::InvalidVaultAddr(address.to_string()));
        }
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingVaultToken)?;
        let mount = normalize_mount(mount).ok_or(ConfigError::EmptyMountPath)?;

        Ok(Self {
            address: address.to_string(),
            token: Zeroizing::new(token.to_string()),
            mount,
            timeout,
        })
    }
}

/// Trim whitespace and surrounding slashes; `None` if nothing remains.
pub fn normalize_mount(mount: &str) -> Option<String> {
    let mount = mount.trim().trim_matches('/');
    if mount.is_empty() {
        None
    } else {
        Some(mount.to_string())
    }
}

/// KV path of the secret for an account.
pub fn secret_path(account_id: &str) -> String {
    format!("{}/{}", ACCOUNT_PATH_PREFIX, account_id)
}

/// Vault KV v2 secret store.
pub struct Vault {
    settings: VaultSettings,
    runtime: tokio::runtime::Runtime,
}

impl Vault {
    /// Create a store; no request is made until the first fetch.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the async runtime cannot start.
    pub fn new(settings: VaultSettings) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::Runtime)?;

        debug!(address = %settings.address, mount = %settings.mount, "vault store ready");
        Ok(Self { settings, runtime })
    }

    fn client(&self, namespace: &str) -> Result<VaultClient> {
        let mut builder = VaultClientSettingsBuilder::default();
        builder
            .address(&self.settings.address)
            .token(self.settings.token.as_str());
        if !namespace.trim().is_empty() {
            builder.namespace(Some(namespace.to_string()));
        }

        let settings = builder
            .build()
            .map_err(|e| StoreError::Client(e.to_string()))?;
        VaultClient::new(settings).map_err(|e| StoreError::Client(e.to_string()))
    }
}

impl SecretStore for Vault {
    fn name(&self) -> &'static str {
        "vault"
    }

    fn fetch(&self, target: &Target, field: &str) -> Result<Zeroizing<String>> {
        let path = secret_path(&target.account_id);
        let namespace = target.namespace.clone();
        trace!(path = %path, namespace = %namespace, "reading from vault");

        let client = self.client(&namespace)?;
        let timeout = self.settings.timeout;

        let data: HashMap<String, Value> = self
            .runtime
            .block_on(async {
                tokio::time::timeout(timeout, kv2::read(&client, &self.settings.mount, &path)).await
            })
            .map_err(|_| StoreError::Timeout {
                path: path.clone(),
                timeout_ms: timeout.as_millis(),
            })?
            .map_err(|e| map_client_error(e, &path, &namespace))?;

        extract_field(data, field, &path)
    }
}

fn map_client_error(err: ClientError, path: &str, namespace: &str) -> StoreError {
    match err {
        ClientError::APIError { code: 404, .. } => StoreError::NotFound {
            path: path.to_string(),
            namespace: namespace.to_string(),
        },
        ClientError::APIError { code, errors } if code == 401 || code == 403 => {
            StoreError::Rejected {
                path: path.to_string(),
                namespace: namespace.to_string(),
                message: errors.join(", "),
            }
        }
        other => StoreError::Backend {
            path: path.to_string(),
            namespace: namespace.to_string(),
            message: other.to_string(),
        },
    }
}

/// Pull a non-empty string field out of a KV v2 data map.
fn extract_field(
    mut data: HashMap<String, Value>,
    field: &str,
    path: &str,
) -> Result<Zeroizing<String>> {
    let value = data.remove(field).ok_or_else(|| StoreError::FieldMissing {
        field: field.to_string(),
        path: path.to_string(),
    })?;

    let Value::String(value) = value else {
        return Err(StoreError::FieldNotString {
            field: field.to_string(),
            path: path.to_string(),
        });
    };

    if value.is_empty() {
        return Err(StoreError::EmptyValue {
            field: field.to_string(),
            path: path.to_string(),
        });
    }

    Ok(Zeroizing::new(value))
}
