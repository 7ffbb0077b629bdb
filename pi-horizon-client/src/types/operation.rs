//! Operation types

use serde::{Deserialize, Serialize};

use super::non_empty;

/// A single operation record
///
/// Only `id` and `type` are common to every operation; the remaining fields
/// are present for `create_account` style operations and absent otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    /// The operation id
    pub id: Option<String>,
    /// The operation type, e.g. `create_account` or `payment`
    #[serde(rename = "type")]
    pub op_type: Option<String>,
    /// When the enclosing ledger closed
    pub created_at: Option<String>,
    /// Whether the enclosing transaction succeeded
    pub transaction_successful: Option<bool>,
    /// Hash of the enclosing transaction
    pub transaction_hash: Option<String>,
    /// The account that funded a newly created account
    pub funder: Option<String>,
    /// The operation's source account
    pub source_account: Option<String>,
    /// The account created or targeted by the operation
    pub account: Option<String>,
    /// Initial balance of a created account
    pub starting_balance: Option<String>,
}

impl Operation {
    /// The funder, falling back to the source account
    pub fn funder_or_source(&self) -> Option<&str> {
        non_empty(&self.funder).or_else(|| non_empty(&self.source_account))
    }

    /// The transaction hash, if the operation carries a non-empty one
    pub fn transaction_hash(&self) -> Option<&str> {
        non_empty(&self.transaction_hash)
    }

    /// The account id, if the operation carries a non-empty one
    pub fn account(&self) -> Option<&str> {
        non_empty(&self.account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_operation() {
        let json = r#"{
            "_links": {"self": {"href": "https://api.mainnet.minepi.com/operations/1"}},
            "id": "1",
            "paging_token": "1",
            "transaction_successful": true,
            "source_account": "GSOURCE",
            "type": "create_account",
            "type_i": 0,
            "created_at": "2024-01-01T00:00:00Z",
            "transaction_hash": "abc123",
            "starting_balance": "1.0000000",
            "funder": "GFUNDER",
            "account": "GNEW"
        }"#;

        let op: Operation = serde_json::from_str(json).unwrap();
        assert_eq!(op.op_type.as_deref(), Some("create_account"));
        assert_eq!(op.transaction_successful, Some(true));
        assert_eq!(op.transaction_hash(), Some("abc123"));
        assert_eq!(op.funder_or_source(), Some("GFUNDER"));
        assert_eq!(op.account(), Some("GNEW"));
        assert_eq!(op.starting_balance.as_deref(), Some("1.0000000"));
    }

    #[test]
    fn test_funder_falls_back_to_source_account() {
        let op: Operation = serde_json::from_str(
            r#"{"id": "2", "type": "payment", "source_account": "GSOURCE"}"#,
        )
        .unwrap();
        assert_eq!(op.funder_or_source(), Some("GSOURCE"));

        let op = Operation {
            funder: Some(String::new()),
            source_account: Some("GSOURCE".to_string()),
            ..Default::default()
        };
        assert_eq!(op.funder_or_source(), Some("GSOURCE"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let op: Operation = serde_json::from_str(r#"{"id": "3"}"#).unwrap();
        assert_eq!(op.transaction_hash(), None);
        assert_eq!(op.account(), None);
        assert_eq!(op.funder_or_source(), None);

        let op = Operation {
            transaction_hash: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(op.transaction_hash(), None);
    }
}
