//! Type aliases for domain concepts.
//!
//! These provide semantic meaning to raw strings in the API.

/// Secret name as declared in the definition file (e.g., "db_password")
pub type SecretName = String;

/// Branch name as supplied by the flag or CI environment
pub type BranchName = String;

/// Opaque account identifier inside the secret store
pub type AccountId = String;

/// Vault namespace (logical partition)
pub type Namespace = String;
