/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// `expectedCurrency` value for Robux
pub const ROBUX_CURRENCY: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernamesRequest {
    pub usernames: Vec<String>,
    pub exclude_banned_users: bool,
}

impl UsernamesRequest {
    /// Lookup of a single username, banned users excluded
    pub fn single(name: &str) -> Self {
        Self {
            usernames: vec![name.to_string()],
            exclude_banned_users: true,
        }
    }
}

/// Body shared by purchase and revoke; the expected fields guard against price or
/// seller drift between fetching a pass and acting on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub expected_currency: u8,
    pub expected_price: u64,
    pub expected_seller_id: u64,
}

impl PurchaseRequest {
    pub fn robux(expected_price: u64, expected_seller_id: u64) -> Self {
        Self {
            expected_currency: ROBUX_CURRENCY,
            expected_price,
            expected_seller_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn usernames_request_wire_shape() {
        let value = serde_json::to_value(UsernamesRequest::single("builderman")).expect("ser");
        assert_eq!(
            value,
            json!({"usernames": ["builderman"], "excludeBannedUsers": true})
        );
    }

    #[test]
    fn purchase_request_wire_shape() {
        let value = serde_json::to_value(PurchaseRequest::robux(25, 7)).expect("ser");
        assert_eq!(
            value,
            json!({"expectedCurrency": 1, "expectedPrice": 25, "expectedSellerId": 7})
        );
    }
}
