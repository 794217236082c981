/*
[INPUT]:  RobloxClient session, ids, usernames and fetched records
[OUTPUT]: High-level user / game-pass operations with explicit partial vs full results
[POS]:    Facade layer - composes endpoint calls into the public API
[UPDATE]: When adding operations that span several endpoints
*/

use tracing::debug;

use crate::http::{ClientConfig, Credentials, Result, RobloxClient, RobloxError};
use crate::types::{Gamepass, PartialGamepass, PartialUser, User, UserRef};

/// Entry point for callers: owns one [`RobloxClient`] session
#[derive(Debug)]
pub struct Roblox {
    client: RobloxClient,
}

impl Roblox {
    /// Unauthenticated access (public endpoints only)
    pub fn new() -> Result<Self> {
        Ok(Self::from_client(RobloxClient::new()?))
    }

    /// Access authorized by a `.ROBLOSECURITY` token
    pub fn authenticated(token: impl Into<String>) -> Result<Self> {
        let client = RobloxClient::with_config(ClientConfig::default(), Some(Credentials::new(token)))?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: RobloxClient) -> Self {
        Self { client }
    }

    /// Underlying endpoint client
    pub fn client(&self) -> &RobloxClient {
        &self.client
    }

    /// Release the session; a second call fails with [`RobloxError::ClientClosed`]
    pub fn close(&self) -> Result<()> {
        self.client.close()
    }

    /// Full profile by id
    pub async fn user(&self, id: u64) -> Result<User> {
        self.client.get_user_by_id(id).await
    }

    /// Username lookup, one request
    pub async fn user_by_name(&self, name: &str) -> Result<PartialUser> {
        self.client.get_user_by_name(name).await
    }

    /// Username lookup followed by a profile fetch
    pub async fn full_user_by_name(&self, name: &str) -> Result<User> {
        let partial = self.client.get_user_by_name(name).await?;
        self.client.get_user_by_id(partial.id).await
    }

    /// Identity behind the session token, one request
    pub async fn authenticated_user(&self) -> Result<PartialUser> {
        self.client.get_authenticated_user().await
    }

    /// Identity behind the session token, upgraded to a full profile
    pub async fn full_authenticated_user(&self) -> Result<User> {
        let partial = self.client.get_authenticated_user().await?;
        self.client.get_user_by_id(partial.id).await
    }

    pub async fn gamepass(&self, id: u64) -> Result<Gamepass> {
        self.client.get_gamepass_by_id(id).await
    }

    /// Game passes created by `user`
    pub async fn user_gamepasses<'a>(
        &self,
        user: impl Into<UserRef<'a>>,
    ) -> Result<Vec<PartialGamepass>> {
        let user_id = user.into().id();
        self.client.get_user_gamepasses(user_id).await
    }

    /// Resolve the embedded creator of a pass to a full profile.
    ///
    /// Fails with [`RobloxError::CreatorNotUser`] without sending a request when the pass
    /// was published by a group or any other non-user account.
    pub async fn gamepass_creator_user(&self, gamepass: &Gamepass) -> Result<User> {
        let creator = gamepass.creator();
        if !creator.is_user() {
            return Err(RobloxError::CreatorNotUser {
                creator_type: creator.creator_type.clone(),
            });
        }
        self.client.get_user_by_id(creator.id).await
    }

    /// Whether `target` owns the pass
    pub async fn gamepass_has_user<'a>(
        &self,
        gamepass: &Gamepass,
        target: impl Into<UserRef<'a>>,
    ) -> Result<bool> {
        let user_id = target.into().id();
        self.client
            .get_user_gamepass_ownership(user_id, gamepass.id)
            .await
    }

    /// Buy the pass at the price and from the seller recorded in `gamepass`.
    ///
    /// Fails without a request when the pass is not for sale or its creator is not a user.
    pub async fn purchase_gamepass(&self, gamepass: &Gamepass) -> Result<()> {
        let (price, seller_id) = expected_sale(gamepass)?;
        debug!(gamepass_id = gamepass.id, price, seller_id, "purchasing game pass");
        self.client
            .purchase_gamepass(gamepass.product_id, price, seller_id)
            .await
    }

    /// Remove the pass from the authenticated user's inventory
    pub async fn revoke_gamepass(&self, gamepass: &Gamepass) -> Result<()> {
        let (price, seller_id) = expected_sale(gamepass)?;
        debug!(gamepass_id = gamepass.id, price, seller_id, "revoking game pass");
        self.client
            .revoke_gamepass_ownership(gamepass.id, price, seller_id)
            .await
    }
}

impl From<RobloxClient> for Roblox {
    fn from(client: RobloxClient) -> Self {
        Self::from_client(client)
    }
}

/// Price and seller a purchase or revoke must be guarded with.
///
/// Only user creators can be named as the expected seller.
fn expected_sale(gamepass: &Gamepass) -> Result<(u64, u64)> {
    let creator = gamepass.creator();
    if !creator.is_user() {
        return Err(RobloxError::CreatorNotUser {
            creator_type: creator.creator_type.clone(),
        });
    }
    let price = gamepass
        .price_in_robux
        .ok_or(RobloxError::GamepassNotForSale)?;
    Ok((price, creator.id))
}
