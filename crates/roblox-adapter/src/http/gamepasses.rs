/*
[INPUT]:  Game-pass / product ids, expected price and seller
[OUTPUT]: Gamepass records, ownership flags, purchase and revoke outcomes
[POS]:    HTTP layer - game-pass and inventory endpoints (purchase/revoke require auth)
[UPDATE]: When adding game-pass endpoints or new purchase reason codes
*/

use reqwest::StatusCode;
use tracing::info;

use crate::http::error::{check_purchase, check_revoke, rejected_request};
use crate::http::{Payload, Result, RobloxClient, Route, Service};
use crate::types::{
    Gamepass, InventoryResponse, PartialGamepass, PurchaseRequest, PurchaseResponse,
    RevokeResponse, UserGamepassesResponse,
};

impl RobloxClient {
    /// Fetch the product info of a game pass
    ///
    /// GET /game-passes/v1/game-passes/{id}/product-info
    pub async fn get_gamepass_by_id(&self, id: u64) -> Result<Gamepass> {
        let id = id.to_string();
        let route = Route::get(
            Service::Apis,
            ["game-passes", "v1", "game-passes", id.as_str(), "product-info"],
        );
        self.execute_json(&route, None).await
    }

    /// List the game passes created by a user (first page only)
    ///
    /// GET /game-passes/v1/users/{id}/game-passes
    pub async fn get_user_gamepasses(&self, user_id: u64) -> Result<Vec<PartialGamepass>> {
        let user_id = user_id.to_string();
        let route = Route::get(
            Service::Apis,
            ["game-passes", "v1", "users", user_id.as_str(), "game-passes"],
        );
        let response: UserGamepassesResponse = self.execute_json(&route, None).await?;
        Ok(response.game_passes)
    }

    /// Whether `user_id` holds `gamepass_id` in their inventory
    ///
    /// GET /v1/users/{user_id}/items/GamePass/{gamepass_id}
    ///
    /// An empty `data` set means "not owned"; a 404 from the endpoint is still an error.
    pub async fn get_user_gamepass_ownership(&self, user_id: u64, gamepass_id: u64) -> Result<bool> {
        let (user, pass) = (user_id.to_string(), gamepass_id.to_string());
        let route = Route::get(
            Service::Inventory,
            ["v1", "users", user.as_str(), "items", "GamePass", pass.as_str()],
        );
        let response: InventoryResponse = self.execute_json(&route, None).await?;
        Ok(response.is_owned())
    }

    /// Buy a game pass, guarded by the price and seller the caller last saw
    ///
    /// POST /game-passes/v1/game-passes/{product_id}/purchase
    pub async fn purchase_gamepass(
        &self,
        product_id: u64,
        expected_price: u64,
        expected_seller_id: u64,
    ) -> Result<()> {
        let product = product_id.to_string();
        let route = Route::post(
            Service::Apis,
            ["game-passes", "v1", "game-passes", product.as_str(), "purchase"],
        );
        let body = serde_json::to_value(PurchaseRequest::robux(expected_price, expected_seller_id))?;

        let response = self.execute(&route, Some(&body)).await?;
        if response.status == StatusCode::BAD_REQUEST {
            return Err(rejected_request(&response.payload, check_purchase));
        }
        let outcome: PurchaseResponse = response.payload.decode()?;
        check_purchase(&outcome)?;

        info!(product_id, expected_price, expected_seller_id, "game pass purchased");
        Ok(())
    }

    /// Remove a game pass from the authenticated user's inventory
    ///
    /// POST /game-passes/v1/game-passes/{id}:revokeownership
    ///
    /// Only structured bodies are checked for `PassAlreadyRevoked`; a text body is
    /// treated as success unless the status is 400.
    pub async fn revoke_gamepass_ownership(
        &self,
        id: u64,
        expected_price: u64,
        expected_seller_id: u64,
    ) -> Result<()> {
        let operation = format!("{id}:revokeownership");
        let route = Route::post(
            Service::Apis,
            ["game-passes", "v1", "game-passes", operation.as_str()],
        );
        let body = serde_json::to_value(PurchaseRequest::robux(expected_price, expected_seller_id))?;

        let response = self.execute(&route, Some(&body)).await?;
        if response.status == StatusCode::BAD_REQUEST {
            return Err(rejected_request(&response.payload, check_revoke));
        }
        if let Payload::Json(value) = response.payload {
            let revoke: RevokeResponse = serde_json::from_value(value)?;
            check_revoke(&revoke)?;
        }

        info!(gamepass_id = id, "game pass ownership revoked");
        Ok(())
    }
}
