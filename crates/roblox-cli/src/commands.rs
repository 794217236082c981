/*
[INPUT]:  Parsed subcommand and a configured Roblox client
[OUTPUT]: JSON value describing the fetched record or action outcome
[POS]:    Command layer - maps CLI subcommands onto facade operations
[UPDATE]: When adding subcommands or facade operations
*/

use anyhow::{Context, Result};
use clap::Subcommand;
use roblox_adapter::Roblox;
use serde_json::{Value, json};
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch a full user profile by id
    User { id: u64 },
    /// Look a user up by username
    Lookup {
        name: String,
        /// Follow up with a full profile fetch
        #[arg(long)]
        full: bool,
    },
    /// Show the user behind the configured authorization
    Me {
        #[arg(long)]
        full: bool,
    },
    /// Fetch a game pass by id
    Gamepass { id: u64 },
    /// List the game passes a user created
    Gamepasses { user_id: u64 },
    /// Check whether a user owns a game pass
    Owns { gamepass_id: u64, user_id: u64 },
    /// Buy a game pass at its current price
    Purchase { gamepass_id: u64 },
    /// Remove a game pass from the authenticated user's inventory
    Revoke { gamepass_id: u64 },
}

/// Run one command against the client
pub async fn run(roblox: &Roblox, command: &Command) -> Result<Value> {
    let value = match command {
        Command::User { id } => json!(roblox.user(*id).await.context("fetch user")?),
        Command::Lookup { name, full: false } => {
            json!(roblox.user_by_name(name).await.context("look up user")?)
        }
        Command::Lookup { name, full: true } => {
            json!(roblox.full_user_by_name(name).await.context("look up user")?)
        }
        Command::Me { full: false } => json!(
            roblox
                .authenticated_user()
                .await
                .context("fetch authenticated user")?
        ),
        Command::Me { full: true } => json!(
            roblox
                .full_authenticated_user()
                .await
                .context("fetch authenticated user")?
        ),
        Command::Gamepass { id } => json!(roblox.gamepass(*id).await.context("fetch game pass")?),
        Command::Gamepasses { user_id } => json!(
            roblox
                .user_gamepasses(*user_id)
                .await
                .context("list game passes")?
        ),
        Command::Owns {
            gamepass_id,
            user_id,
        } => {
            let gamepass = roblox.gamepass(*gamepass_id).await.context("fetch game pass")?;
            let owned = roblox
                .gamepass_has_user(&gamepass, *user_id)
                .await
                .context("check ownership")?;
            json!({ "gamepass_id": gamepass_id, "user_id": user_id, "owned": owned })
        }
        Command::Purchase { gamepass_id } => {
            let gamepass = roblox.gamepass(*gamepass_id).await.context("fetch game pass")?;
            roblox
                .purchase_gamepass(&gamepass)
                .await
                .context("purchase game pass")?;
            info!(gamepass_id, name = %gamepass, "purchase complete");
            json!({ "gamepass_id": gamepass_id, "purchased": true, "price": gamepass.price_in_robux })
        }
        Command::Revoke { gamepass_id } => {
            let gamepass = roblox.gamepass(*gamepass_id).await.context("fetch game pass")?;
            roblox
                .revoke_gamepass(&gamepass)
                .await
                .context("revoke game pass")?;
            info!(gamepass_id, name = %gamepass, "revoke complete");
            json!({ "gamepass_id": gamepass_id, "revoked": true })
        }
    };
    Ok(value)
}
