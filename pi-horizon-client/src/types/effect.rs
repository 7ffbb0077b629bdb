//! Effect types

use serde::{Deserialize, Serialize};

use super::common::Page;

/// A side effect of an operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Effect {
    /// The effect id
    pub id: Option<String>,
    /// The effect type, e.g. `account_created`
    #[serde(rename = "type")]
    pub effect_type: Option<String>,
    /// The account the effect applies to
    pub account: Option<String>,
    /// Amount moved, for balance-changing effects
    pub amount: Option<String>,
}

/// A page of effects
pub type EffectsPage = Page<Effect>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effects_page() {
        let json = r#"{
            "_links": {},
            "_embedded": {
                "records": [
                    {"id": "1-1", "type": "account_created", "account": "GNEW", "starting_balance": "1.0"},
                    {"id": "1-2", "type": "account_debited", "account": "GFUNDER", "amount": "1.0"},
                    {"id": "1-3", "type": "signer_created", "account": "GNEW", "weight": 1}
                ]
            }
        }"#;

        let page: EffectsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page.records()[0].effect_type.as_deref(), Some("account_created"));
        assert_eq!(page.records()[1].amount.as_deref(), Some("1.0"));
    }
}
