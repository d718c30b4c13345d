//! Core library components.
//!
//! This module contains the reusable logic for loading and validating the
//! secrets definition file, resolving branch overrides and fetching values
//! from a secret store.

pub mod branch;
pub mod config;
pub mod constants;
pub mod domain;
pub mod fetch;
pub mod output;
pub mod resolve;
pub mod store;
pub mod types;
pub mod validation;
