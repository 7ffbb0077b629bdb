//! Data types for the Horizon client
//!
//! These mirror the subset of the Horizon resource schema the client reads.
//! Fields are optional because the server omits them depending on the
//! operation type.

pub mod account;
pub mod common;
pub mod effect;
pub mod operation;
pub mod transaction;

// Re-export commonly used types
pub use account::{Account, Balance, NATIVE_ASSET_TYPE, Signer};
pub use common::{Embedded, Page};
pub use effect::{Effect, EffectsPage};
pub use operation::Operation;
pub use transaction::Transaction;

use serde::{Deserialize, Deserializer};

/// Treat an empty string the same as an absent field
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Deserialize a list where `null` means the same as an absent key
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
