/*
[INPUT]:  Decoded JSON payloads from users/apis endpoints
[OUTPUT]: Immutable domain records (users, creators, game passes)
[POS]:    Data layer - record mapping between wire payloads and domain types
[UPDATE]: When API schema changes or new record fields are needed
*/

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::CreatorType;
use super::responses::{GamepassProductInfo, PartialGamepassPayload};

/// Minimal identity returned by username lookups and the authenticated-user endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUser {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub has_verified_badge: Option<bool>,
}

/// Full user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub description: String,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub has_verified_badge: bool,
    #[serde(default)]
    pub external_app_display_name: Option<String>,
    pub created: DateTime<Utc>,
}

/// Account that published a game pass, embedded in game-pass payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(rename = "Id", alias = "id", alias = "creatorId")]
    pub id: u64,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "CreatorType", alias = "creatorType")]
    pub creator_type: CreatorType,
    #[serde(
        rename = "CreatorTargetId",
        alias = "creatorTargetId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creator_target_id: Option<u64>,
}

impl Creator {
    pub fn is_user(&self) -> bool {
        self.creator_type == CreatorType::User
    }
}

/// Game pass as listed on a user's creations page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartialGamepassPayload", into = "PartialGamepassPayload")]
pub struct PartialGamepass {
    pub id: u64,
    pub asset_id: u64,
    pub name: String,
    pub description: String,
    pub is_for_sale: bool,
    /// `None` whenever the pass is not for sale
    pub price_in_robux: Option<u64>,
    pub creator: Creator,
}

impl PartialGamepass {
    pub fn creator(&self) -> &Creator {
        &self.creator
    }
}

impl From<PartialGamepassPayload> for PartialGamepass {
    fn from(payload: PartialGamepassPayload) -> Self {
        Self {
            id: payload.game_pass_id,
            asset_id: payload.icon_asset_id,
            name: payload.name,
            description: payload.description,
            is_for_sale: payload.is_for_sale,
            price_in_robux: payload.price.filter(|_| payload.is_for_sale),
            creator: payload.creator,
        }
    }
}

impl From<PartialGamepass> for PartialGamepassPayload {
    fn from(gamepass: PartialGamepass) -> Self {
        Self {
            game_pass_id: gamepass.id,
            icon_asset_id: gamepass.asset_id,
            name: gamepass.name,
            description: gamepass.description,
            is_for_sale: gamepass.is_for_sale,
            price: gamepass.price_in_robux,
            creator: gamepass.creator,
        }
    }
}

/// Full game-pass product info; the aggregate purchase, revoke and ownership work on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GamepassProductInfo", into = "GamepassProductInfo")]
pub struct Gamepass {
    pub id: u64,
    pub target_id: u64,
    pub product_id: u64,
    pub product_type: String,
    pub asset_id: u64,
    pub asset_type_id: u32,
    pub icon_image_asset_id: u64,
    pub name: String,
    pub description: String,
    /// `None` whenever the pass is not for sale
    pub price_in_robux: Option<u64>,
    pub price_in_tickets: Option<u64>,
    pub sales: u64,
    pub is_new: bool,
    pub is_for_sale: bool,
    pub is_public_domain: bool,
    pub is_limited: bool,
    pub is_limited_unique: bool,
    pub remaining: Option<u64>,
    pub minimum_membership_level: u32,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub creator: Creator,
}

impl Gamepass {
    /// Embedded creator, no request involved
    pub fn creator(&self) -> &Creator {
        &self.creator
    }
}

impl From<GamepassProductInfo> for Gamepass {
    fn from(info: GamepassProductInfo) -> Self {
        let for_sale = info.is_for_sale;
        Self {
            id: info.target_id,
            target_id: info.target_id,
            product_id: info.product_id,
            product_type: info.product_type,
            asset_id: info.asset_id,
            asset_type_id: info.asset_type_id,
            icon_image_asset_id: info.icon_image_asset_id,
            name: info.name,
            description: info.description,
            price_in_robux: info.price_in_robux.filter(|_| for_sale),
            price_in_tickets: info.price_in_tickets.filter(|_| for_sale),
            sales: info.sales,
            is_new: info.is_new,
            is_for_sale: for_sale,
            is_public_domain: info.is_public_domain,
            is_limited: info.is_limited,
            is_limited_unique: info.is_limited_unique,
            remaining: info.remaining,
            minimum_membership_level: info.minimum_membership_level,
            created: info.created,
            updated: info.updated,
            creator: info.creator,
        }
    }
}

impl From<Gamepass> for GamepassProductInfo {
    fn from(gamepass: Gamepass) -> Self {
        Self {
            target_id: gamepass.target_id,
            product_type: gamepass.product_type,
            asset_id: gamepass.asset_id,
            product_id: gamepass.product_id,
            name: gamepass.name,
            description: gamepass.description,
            asset_type_id: gamepass.asset_type_id,
            creator: gamepass.creator,
            icon_image_asset_id: gamepass.icon_image_asset_id,
            created: gamepass.created,
            updated: gamepass.updated,
            price_in_robux: gamepass.price_in_robux,
            price_in_tickets: gamepass.price_in_tickets,
            sales: gamepass.sales,
            is_new: gamepass.is_new,
            is_for_sale: gamepass.is_for_sale,
            is_public_domain: gamepass.is_public_domain,
            is_limited: gamepass.is_limited,
            is_limited_unique: gamepass.is_limited_unique,
            remaining: gamepass.remaining,
            minimum_membership_level: gamepass.minimum_membership_level,
        }
    }
}

macro_rules! display_as_name {
    ($($record:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $record {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.name)
                }
            }
        )+
    };
}

display_as_name!(PartialUser, User, Creator, PartialGamepass, Gamepass);

pub(crate) mod serde_helpers {
    use serde::{Deserialize, Deserializer};

    /// Treat an explicit `null` like a missing field
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_info(for_sale: bool, price: Option<u64>) -> serde_json::Value {
        json!({
            "TargetId": 215673674,
            "ProductType": "Game Pass",
            "AssetId": 0,
            "ProductId": 1304552081,
            "Name": "VIP",
            "Description": null,
            "AssetTypeId": 0,
            "Creator": {
                "Id": 7437887983u64,
                "Name": "builder",
                "CreatorType": "User",
                "CreatorTargetId": 7437887983u64,
                "HasVerifiedBadge": false
            },
            "IconImageAssetId": 12725151845u64,
            "Created": "2023-03-01T10:20:30.123Z",
            "Updated": "2024-01-02T03:04:05Z",
            "PriceInRobux": price,
            "PriceInTickets": null,
            "Sales": 12,
            "IsNew": false,
            "IsForSale": for_sale,
            "IsPublicDomain": false,
            "IsLimited": false,
            "IsLimitedUnique": false,
            "Remaining": null,
            "MinimumMembershipLevel": 0
        })
    }

    #[test]
    fn gamepass_maps_product_info() {
        let gamepass: Gamepass =
            serde_json::from_value(product_info(true, Some(25))).expect("gamepass");

        assert_eq!(gamepass.id, 215_673_674);
        assert_eq!(gamepass.target_id, gamepass.id);
        assert_eq!(gamepass.product_id, 1_304_552_081);
        assert_eq!(gamepass.price_in_robux, Some(25));
        assert_eq!(gamepass.description, "");
        assert!(gamepass.creator().is_user());
        assert_eq!(gamepass.creator().creator_target_id, Some(7_437_887_983));
        assert_eq!(
            gamepass.updated,
            DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
                .expect("ts")
                .with_timezone(&Utc)
        );
        assert_eq!(gamepass.to_string(), "VIP");
    }

    #[test]
    fn gamepass_not_for_sale_has_no_price() {
        let gamepass: Gamepass =
            serde_json::from_value(product_info(false, Some(25))).expect("gamepass");
        assert!(!gamepass.is_for_sale);
        assert_eq!(gamepass.price_in_robux, None);
    }

    #[test]
    fn gamepass_survives_serialization() {
        let gamepass: Gamepass =
            serde_json::from_value(product_info(true, Some(25))).expect("gamepass");

        let value = serde_json::to_value(&gamepass).expect("serialize");
        assert_eq!(value["TargetId"], 215_673_674);
        assert_eq!(value["PriceInRobux"], 25);

        let restored: Gamepass = serde_json::from_value(value).expect("deserialize");
        assert_eq!(restored, gamepass);
    }

    #[test]
    fn partial_gamepass_survives_serialization() {
        let gamepass = PartialGamepass {
            id: 42,
            asset_id: 7,
            name: "Double Coins".to_string(),
            description: "x2".to_string(),
            is_for_sale: true,
            price_in_robux: Some(100),
            creator: Creator {
                id: 5,
                name: "maker".to_string(),
                creator_type: CreatorType::User,
                creator_target_id: None,
            },
        };

        let value = serde_json::to_value(&gamepass).expect("serialize");
        assert_eq!(value["gamePassId"], 42);

        let restored: PartialGamepass = serde_json::from_value(value).expect("deserialize");
        assert_eq!(restored, gamepass);
    }

    #[test]
    fn partial_gamepass_accepts_camel_case_creator() {
        let value = json!({
            "gamePassId": 42,
            "iconAssetId": 7,
            "name": "Double Coins",
            "description": "x2",
            "isForSale": true,
            "price": 100,
            "creator": {"creatorType": "Group", "creatorTargetId": 99, "id": 0, "name": "Studio"}
        });
        let gamepass: PartialGamepass = serde_json::from_value(value).expect("partial gamepass");

        assert_eq!(gamepass.id, 42);
        assert_eq!(gamepass.asset_id, 7);
        assert_eq!(gamepass.price_in_robux, Some(100));
        assert_eq!(gamepass.creator().creator_type, CreatorType::Group);
        assert!(!gamepass.creator().is_user());
    }

    #[test]
    fn user_tolerates_null_description() {
        let value = json!({
            "id": 1,
            "name": "Roblox",
            "displayName": "Roblox",
            "description": null,
            "isBanned": false,
            "hasVerifiedBadge": true,
            "externalAppDisplayName": null,
            "created": "2006-02-27T21:06:40.3Z"
        });
        let user: User = serde_json::from_value(value).expect("user");
        assert_eq!(user.description, "");
        assert!(user.has_verified_badge);
        assert_eq!(user.to_string(), "Roblox");
    }

    #[test]
    fn partial_user_without_badge() {
        let value = json!({"id": 5, "name": "someone", "displayName": "Someone"});
        let user: PartialUser = serde_json::from_value(value).expect("partial user");
        assert_eq!(user.has_verified_badge, None);
    }
}
