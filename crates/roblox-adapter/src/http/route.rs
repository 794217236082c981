/*
[INPUT]:  HTTP method, service host label, ordered path segments
[OUTPUT]: Absolute request URL for a given base-url template
[POS]:    HTTP layer - request descriptors
[UPDATE]: When adding a new Roblox service host
*/

use std::fmt;

use reqwest::{Method, Url};

/// Placeholder replaced by the service label in a base-url template
pub const SERVICE_PLACEHOLDER: &str = "{service}";

/// Production base-url template
pub const DEFAULT_BASE_URL: &str = "https://{service}.roblox.com";

/// Roblox API service hosts used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Users,
    Apis,
    Inventory,
}

impl Service {
    pub fn label(self) -> &'static str {
        match self {
            Service::Users => "users",
            Service::Apis => "apis",
            Service::Inventory => "inventory",
        }
    }
}

/// One request target: method, service host and path segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    method: Method,
    service: Service,
    path: Vec<String>,
}

impl Route {
    pub fn new<I, S>(method: Method, service: Service, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            service,
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    pub fn get<I, S>(service: Service, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, service, path)
    }

    pub fn post<I, S>(service: Service, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, service, path)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn service(&self) -> Service {
        self.service
    }

    /// Path segments joined with `/`, without leading or trailing slash
    pub fn path(&self) -> String {
        self.path.join("/")
    }

    /// Resolve against a base-url template such as `https://{service}.roblox.com`.
    ///
    /// Templates without the placeholder route every service to the same host.
    pub fn url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let base = base_url.replace(SERVICE_PLACEHOLDER, self.service.label());
        let base = base.trim_end_matches('/');
        Url::parse(&format!("{base}/{}", self.path()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:/{}", self.method, self.service.label(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_uses_service_host() {
        let route = Route::get(Service::Users, ["v1", "users", "1"]);
        let url = route.url(DEFAULT_BASE_URL).expect("url");
        assert_eq!(url.as_str(), "https://users.roblox.com/v1/users/1");
    }

    #[test]
    fn test_url_has_no_trailing_slash() {
        let route = Route::post(
            Service::Apis,
            ["game-passes", "v1", "game-passes", "42:revokeownership"],
        );
        let url = route.url("https://{service}.roblox.com/").expect("url");
        assert_eq!(
            url.as_str(),
            "https://apis.roblox.com/game-passes/v1/game-passes/42:revokeownership"
        );
        assert!(!url.as_str().ends_with('/'));
    }

    #[test]
    fn test_url_without_placeholder() {
        let route = Route::get(Service::Inventory, ["v1", "users", "7", "items", "GamePass", "9"]);
        let url = route.url("http://127.0.0.1:8080").expect("url");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/users/7/items/GamePass/9");
    }

    #[test]
    fn test_invalid_base_url() {
        let route = Route::get(Service::Users, ["v1"]);
        assert!(route.url("not a url {service}").is_err());
    }

    #[test]
    fn test_display() {
        let route = Route::get(Service::Users, ["v1", "users", "authenticated"]);
        assert_eq!(route.to_string(), "GET users:/v1/users/authenticated");
    }
}
