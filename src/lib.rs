//! vaultfetcher - Branch-aware secret fetching for CI pipelines.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── args          # Argument normalization and value parsers
//! │   ├── check         # Validation-only report
//! │   ├── fetch         # Fetch secrets and write the output file
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # vault_secrets.yaml loading
//!     ├── domain/       # Target, Secret, BranchOverride
//!     ├── validation    # Schema validation (all issues at once)
//!     ├── resolve       # Branch-override resolution
//!     ├── branch        # Active branch detection
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait
//!     │   ├── vault     # HashiCorp Vault KV v2
//!     │   └── memory    # In-memory store
//!     ├── fetch         # Plan and fetch orchestration
//!     └── output        # vault_received.yaml rendering
//! ```
//!
//! # Example
//!
//! ```
//! use vaultfetcher::core::config::Config;
//! use vaultfetcher::core::resolve::resolve_target;
//!
//! let config = Config::parse(
//!     r#"
//! vault_secrets:
//!   - name: db
//!     default:
//!       vault: { account_id: "A1", namespace: "N1" }
//!     branch-overrides:
//!       - name: qa
//!         vault: { account_id: "A2", namespace: "N2" }
//! "#,
//! )
//! .unwrap();
//!
//! let (target, fetch) = resolve_target(&config.secrets()[0], "origin/qa").into_parts();
//! assert!(fetch);
//! assert_eq!(target.account_id, "A2");
//! ```

pub mod cli;
pub mod core;
pub mod error;
