/*
[INPUT]:  Usernames, user ids and the session's ROBLOSECURITY cookie
[OUTPUT]: PartialUser / User records
[POS]:    HTTP layer - users.roblox.com endpoints
[UPDATE]: When adding user endpoints or changing lookup semantics
*/

use tracing::debug;

use crate::http::{Result, RobloxClient, RobloxError, Route, Service};
use crate::types::{PartialUser, User, UsernamesRequest, UsernamesResponse};

impl RobloxClient {
    /// Look a user up by username, banned users excluded
    ///
    /// POST /v1/usernames/users
    pub async fn get_user_by_name(&self, name: &str) -> Result<PartialUser> {
        let route = Route::post(Service::Users, ["v1", "usernames", "users"]);
        let body = serde_json::to_value(UsernamesRequest::single(name))?;

        let response: UsernamesResponse = self.execute_json(&route, Some(&body)).await?;
        let user = response
            .data
            .into_iter()
            .next()
            .ok_or(RobloxError::NotFound)?;

        debug!(name, user_id = user.id, "resolved username");
        Ok(user)
    }

    /// Fetch the full profile of a user
    ///
    /// GET /v1/users/{id}
    pub async fn get_user_by_id(&self, id: u64) -> Result<User> {
        let id = id.to_string();
        let route = Route::get(Service::Users, ["v1", "users", id.as_str()]);
        self.execute_json(&route, None).await
    }

    /// Identity behind the session's authorization
    ///
    /// GET /v1/users/authenticated
    pub async fn get_authenticated_user(&self) -> Result<PartialUser> {
        let route = Route::get(Service::Users, ["v1", "users", "authenticated"]);
        self.execute_json(&route, None).await
    }
}
