//! In-memory secret store.
//!
//! Holds secrets keyed by target. Used for tests and offline runs.

use std::collections::HashMap;

use zeroize::Zeroizing;

use super::{secret_path, Result, SecretStore};
use crate::core::domain::Target;
use crate::error::StoreError;

/// In-memory store keyed by trimmed (account_id, namespace).
#[derive(Debug, Default)]
pub struct Memory {
    secrets: HashMap<(String, String), HashMap<String, String>>,
}

impl Memory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace `field` in the secret at `target`.
    pub fn insert(&mut self, target: &Target, field: &str, value: &str) {
        self.secrets
            .entry(key(target))
            .or_default()
            .insert(field.to_string(), value.to_string());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, target: &Target, field: &str, value: &str) -> Self {
        self.insert(target, field, value);
        self
    }
}

fn key(target: &Target) -> (String, String) {
    (
        target.account_id.trim().to_string(),
        target.namespace.trim().to_string(),
    )
}

impl SecretStore for Memory {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fetch(&self, target: &Target, field: &str) -> Result<Zeroizing<String>> {
        let path = secret_path(&target.account_id);
        let fields = self
            .secrets
            .get(&key(target))
            .ok_or_else(|| StoreError::NotFound {
                path: path.clone(),
                namespace: target.namespace.clone(),
            })?;

        let value = fields.get(field).ok_or_else(|| StoreError::FieldMissing {
            field: field.to_string(),
            path: path.clone(),
        })?;

        if value.is_empty() {
            return Err(StoreError::EmptyValue {
                field: field.to_string(),
                path,
            });
        }

        Ok(Zeroizing::new(value.clone()))
    }
}
