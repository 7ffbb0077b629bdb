//! Transaction types

use serde::{Deserialize, Serialize};

/// A committed transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// The transaction id (same as the hash on Horizon)
    pub id: Option<String>,
    /// The transaction hash
    pub hash: Option<String>,
    /// Whether the transaction succeeded
    pub successful: Option<bool>,
    /// Sequence number of the ledger that included the transaction
    pub ledger: Option<u64>,
    /// When the ledger closed
    pub created_at: Option<String>,
    /// The transaction's source account
    pub source_account: Option<String>,
    /// Number of operations in the transaction
    pub operation_count: Option<u32>,
}

impl Transaction {
    /// Whether the returned hash equals the one that was requested
    pub fn hash_matches(&self, requested: &str) -> bool {
        self.hash.as_deref() == Some(requested)
    }
}
