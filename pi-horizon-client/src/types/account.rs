//! Account-related types

use serde::{Deserialize, Serialize};

use super::{non_empty, null_as_empty};

/// `asset_type` of the ledger's base currency
pub const NATIVE_ASSET_TYPE: &str = "native";

/// Account information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// The account id
    pub account_id: Option<String>,
    /// Alternate id field some deployments return instead of `account_id`
    pub id: Option<String>,
    /// The account's current sequence number
    pub sequence: Option<String>,
    /// Balances held by the account
    #[serde(deserialize_with = "null_as_empty")]
    pub balances: Vec<Balance>,
    /// Signers authorised on the account
    #[serde(deserialize_with = "null_as_empty")]
    pub signers: Vec<Signer>,
}

/// A single asset balance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    /// `native` for the base currency, otherwise the issued asset kind
    pub asset_type: Option<String>,
    /// The balance as a decimal string
    pub balance: Option<String>,
    /// Code of an issued asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    /// Issuer of an issued asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

/// An account signer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signer {
    /// The signer key
    pub key: Option<String>,
    /// The signer weight
    pub weight: Option<u32>,
    /// The signer key type
    #[serde(rename = "type")]
    pub signer_type: Option<String>,
}

impl Account {
    /// The account id, falling back to `id`
    pub fn account_id(&self) -> Option<&str> {
        non_empty(&self.account_id).or_else(|| non_empty(&self.id))
    }

    /// Balance of the first native-asset entry, if any
    pub fn native_balance(&self) -> Option<&str> {
        self.balances
            .iter()
            .find(|b| b.asset_type.as_deref() == Some(NATIVE_ASSET_TYPE))
            .and_then(|b| non_empty(&b.balance))
    }

    /// Number of signers on the account
    pub fn num_signers(&self) -> usize {
        self.signers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserialization() {
        let json = r#"{
            "id": "GNEW",
            "account_id": "GNEW",
            "sequence": "123456789012",
            "subentry_count": 0,
            "balances": [
                {"balance": "5.0000000", "asset_type": "credit_alphanum4", "asset_code": "USD", "asset_issuer": "GISSUER"},
                {"balance": "1.0000000", "buying_liabilities": "0.0000000", "asset_type": "native"}
            ],
            "signers": [
                {"weight": 1, "key": "GNEW", "type": "ed25519_public_key"}
            ]
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_id(), Some("GNEW"));
        assert_eq!(account.sequence.as_deref(), Some("123456789012"));
        assert_eq!(account.native_balance(), Some("1.0000000"));
        assert_eq!(account.num_signers(), 1);
        assert_eq!(account.signers[0].weight, Some(1));
    }

    #[test]
    fn test_first_native_balance_wins() {
        let account = Account {
            balances: vec![
                Balance {
                    asset_type: Some("native".to_string()),
                    balance: Some("1.0".to_string()),
                    ..Default::default()
                },
                Balance {
                    asset_type: Some("native".to_string()),
                    balance: Some("2.0".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(account.native_balance(), Some("1.0"));
    }

    #[test]
    fn test_no_native_balance() {
        let json = r#"{
            "account_id": "GNEW",
            "balances": [{"balance": "5.0", "asset_type": "credit_alphanum4", "asset_code": "USD"}]
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.native_balance(), None);
    }

    #[test]
    fn test_null_collections() {
        let account: Account =
            serde_json::from_str(r#"{"account_id": "G", "balances": null, "signers": null}"#)
                .unwrap();
        assert_eq!(account.native_balance(), None);
        assert_eq!(account.num_signers(), 0);
    }

    #[test]
    fn test_missing_collections() {
        let account: Account = serde_json::from_str(r#"{"id": "GOTHER"}"#).unwrap();
        assert_eq!(account.account_id(), Some("GOTHER"));
        assert_eq!(account.native_balance(), None);
        assert_eq!(account.num_signers(), 0);
    }
}
