//! Secret store backends.
//!
//! A store answers one question: what is the value of `field` in the
//! secret located at a [`Target`]?
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `aws.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Cloud { /* ... */ }
//!
//! impl SecretStore for Cloud {
//!     fn name(&self) -> &'static str {
//!         "cloud"
//!     }
//!     fn fetch(&self, target: &Target, field: &str) -> Result<Zeroizing<String>> {
//!         // Read from cloud
//!     }
//! }
//! ```

use zeroize::Zeroizing;

use crate::core::domain::Target;
use crate::error::StoreError;

mod memory;
mod vault;

pub use memory::Memory;
pub use vault::{normalize_mount, secret_path, Vault, VaultSettings};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Secret store trait.
///
/// Implementations perform one lookup per call with no retries; callers
/// decide how failures affect the rest of a batch.
pub trait SecretStore {
    /// Backend name for logging.
    fn name(&self) -> &'static str;

    /// Read `field` from the secret at `target`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the secret or field is missing, the field is
    /// not a non-empty string, or the store rejects the request.
    fn fetch(&self, target: &Target, field: &str) -> Result<Zeroizing<String>>;
}
