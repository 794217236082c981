/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - wire shapes of response bodies
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::serde_helpers::null_as_default;
use super::models::{Creator, PartialGamepass, PartialUser};

/// Standard `{errors: [{code, message}]}` error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorsResponse {
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsernamesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<PartialUser>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<serde_json::Value>,
}

impl InventoryResponse {
    pub fn is_owned(&self) -> bool {
        !self.data.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGamepassesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_passes: Vec<PartialGamepass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    #[serde(default)]
    pub purchased: Option<bool>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub shortfall_price: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeResponse {
    #[serde(default)]
    pub error_code: Option<String>,
}

/// Listing entry of `/game-passes/v1/users/{id}/game-passes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialGamepassPayload {
    pub game_pass_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_asset_id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub is_for_sale: bool,
    #[serde(default)]
    pub price: Option<u64>,
    pub creator: Creator,
}

/// Body of `/game-passes/v1/game-passes/{id}/product-info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GamepassProductInfo {
    pub target_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset_id: u64,
    pub product_id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset_type_id: u32,
    pub creator: Creator,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_image_asset_id: u64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub price_in_robux: Option<u64>,
    #[serde(default)]
    pub price_in_tickets: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales: u64,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_for_sale: bool,
    #[serde(default)]
    pub is_public_domain: bool,
    #[serde(default)]
    pub is_limited: bool,
    #[serde(default)]
    pub is_limited_unique: bool,
    #[serde(default)]
    pub remaining: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub minimum_membership_level: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inventory_ownership() {
        let empty: InventoryResponse = serde_json::from_value(json!({"data": []})).expect("empty");
        assert!(!empty.is_owned());

        let null: InventoryResponse = serde_json::from_value(json!({"data": null})).expect("null");
        assert!(!null.is_owned());

        let owned: InventoryResponse = serde_json::from_value(json!({
            "previousPageCursor": null,
            "nextPageCursor": null,
            "data": [{"type": "GamePass", "id": 9, "name": "VIP", "instanceId": null}]
        }))
        .expect("owned");
        assert!(owned.is_owned());
    }

    #[test]
    fn purchase_response_ignores_unknown_fields() {
        let response: PurchaseResponse = serde_json::from_value(json!({
            "purchased": true,
            "reason": "Success",
            "productId": 1304552081,
            "statusCode": 500,
            "title": "Purchase completed",
            "shortfallPrice": 0
        }))
        .expect("purchase response");
        assert_eq!(response.purchased, Some(true));
        assert_eq!(response.shortfall_price, Some(0));
    }
}
