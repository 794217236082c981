/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for roblox-adapter tests

#![allow(dead_code)]

use roblox_adapter::{ClientConfig, Credentials, Roblox, RobloxClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock `.ROBLOSECURITY` token for testing
pub fn mock_roblosecurity() -> String {
    "_|WARNING:-DO-NOT-SHARE-THIS.--test-cookie".to_string()
}

/// Client routing every service host to the mock server
pub fn client_for(server: &MockServer, authenticated: bool) -> RobloxClient {
    let credentials = authenticated.then(|| Credentials::new(mock_roblosecurity()));
    RobloxClient::with_config_and_base_url(ClientConfig::default(), credentials, &server.uri())
        .expect("client init")
}

pub fn roblox_for(server: &MockServer, authenticated: bool) -> Roblox {
    Roblox::from_client(client_for(server, authenticated))
}

pub fn user_json(id: u64, name: &str, created: &str) -> Value {
    json!({
        "description": "hello there",
        "created": created,
        "isBanned": false,
        "externalAppDisplayName": null,
        "hasVerifiedBadge": false,
        "id": id,
        "name": name,
        "displayName": name.to_uppercase()
    })
}

pub fn partial_user_json(id: u64, name: &str) -> Value {
    json!({
        "requestedUsername": name,
        "hasVerifiedBadge": false,
        "id": id,
        "name": name,
        "displayName": name.to_uppercase()
    })
}

pub fn product_info_json(
    gamepass_id: u64,
    product_id: u64,
    price: Option<u64>,
    creator_id: u64,
    creator_type: &str,
) -> Value {
    json!({
        "TargetId": gamepass_id,
        "ProductType": "Game Pass",
        "AssetId": 0,
        "ProductId": product_id,
        "Name": "VIP",
        "Description": "VIP perks",
        "AssetTypeId": 0,
        "Creator": {
            "Id": creator_id,
            "Name": "builder",
            "CreatorType": creator_type,
            "CreatorTargetId": creator_id,
            "HasVerifiedBadge": false
        },
        "IconImageAssetId": 12725151845u64,
        "Created": "2023-03-01T10:20:30.123Z",
        "Updated": "2024-01-02T03:04:05Z",
        "PriceInRobux": price,
        "PriceInTickets": null,
        "Sales": 3,
        "IsNew": false,
        "IsForSale": price.is_some(),
        "IsPublicDomain": false,
        "IsLimited": false,
        "IsLimitedUnique": false,
        "Remaining": null,
        "MinimumMembershipLevel": 0
    })
}

pub fn errors_json(message: &str) -> Value {
    json!({"errors": [{"code": 0, "message": message}]})
}
