//! Domain types.

mod secret;
mod target;

pub use secret::{BranchOverride, DefaultTarget, Secret};
pub use target::Target;

use serde::{Deserialize, Deserializer};

/// Deserialize a field, mapping an explicit YAML `null` to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
