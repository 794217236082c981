/*
[INPUT]:  HTTP configuration (timeouts, user agent, base url), optional ROBLOSECURITY token
[OUTPUT]: Shared session executing routes and returning classified, decoded payloads
[POS]:    HTTP layer - core client implementation (request gateway)
[UPDATE]: When changing session state, the CSRF handshake or response classification
*/

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, redirect};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::http::route::{DEFAULT_BASE_URL, Route, Service};
use crate::http::error::rejected_request;
use crate::http::{Result, RobloxError};

/// Response header carrying a fresh CSRF token on a 403 challenge
pub const CSRF_RESPONSE_HEADER: &str = "x-csrf-token";
/// Request header the token is echoed back in
pub const CSRF_REQUEST_HEADER: &str = "X-CSRF-TOKEN";
/// Cookie holding the session token
pub const AUTH_COOKIE_NAME: &str = ".ROBLOSECURITY";

const DEFAULT_USER_AGENT: &str = concat!(
    "roblox-adapter/",
    env!("CARGO_PKG_VERSION"),
    " (reqwest)"
);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Clone)]
pub struct Credentials {
    pub token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Payload::Text(_))
    }

    /// Deserialize a JSON body into `T`; text bodies are rejected
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Payload::Json(value) => Ok(serde_json::from_value(value)?),
            Payload::Text(text) => Err(RobloxError::InvalidResponse(format!(
                "expected a JSON body, got text: {}",
                preview(&text)
            ))),
        }
    }
}

/// Body and status of a successfully classified exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub payload: Payload,
    pub status: StatusCode,
}

/// Connection state shared by every request of one client.
///
/// `csrf_token` is only written by [`RobloxClient::store_csrf_token`].
#[derive(Debug)]
struct Session {
    http_client: Client,
    csrf_token: Option<HeaderValue>,
}

/// Main HTTP client for the Roblox web APIs
///
/// Concurrent calls share one session, so a CSRF token captured by one request is sent by
/// all later ones. Requests are not serialized; callers needing at-most-one-in-flight
/// semantics (e.g. purchases) must serialize their own calls. Dropping a returned future
/// cancels the in-flight request.
#[derive(Debug)]
pub struct RobloxClient {
    session: RwLock<Option<Session>>,
    base_url: String,
    authenticated: bool,
}

impl RobloxClient {
    /// Create an unauthenticated client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Create a client sending the given `.ROBLOSECURITY` token
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), Some(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        Self::with_config_and_base_url(config, credentials, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base-url template (`{service}` is substituted)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        credentials: Option<Credentials>,
        base_url: &str,
    ) -> Result<Self> {
        // Reject unusable templates before any request is built.
        Route::get(Service::Users, ["v1"]).url(base_url)?;

        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| RobloxError::Config(format!("invalid user agent: {e}")))?;
        headers.insert(header::USER_AGENT, user_agent);

        let authenticated = credentials.is_some();
        if let Some(credentials) = credentials {
            let mut cookie =
                HeaderValue::from_str(&format!("{AUTH_COOKIE_NAME}={}", credentials.token))
                    .map_err(|e| RobloxError::Config(format!("invalid authorization token: {e}")))?;
            cookie.set_sensitive(true);
            headers.insert(header::COOKIE, cookie);
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(redirect::Policy::none())
            .default_headers(headers)
            .build()?;

        debug!(base_url, authenticated, "roblox client created");

        Ok(Self {
            session: RwLock::new(Some(Session {
                http_client,
                csrf_token: None,
            })),
            base_url: base_url.to_string(),
            authenticated,
        })
    }

    /// Whether a `.ROBLOSECURITY` token is attached to requests
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// CSRF token currently attached to requests, if any
    pub fn csrf_token(&self) -> Option<String> {
        let guard = self.session.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .and_then(|session| session.csrf_token.as_ref())
            .and_then(|token| token.to_str().ok())
            .map(str::to_string)
    }

    pub fn is_closed(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Release the session.
    ///
    /// The session is released exactly once; closing again fails with
    /// [`RobloxError::ClientClosed`], as does any request issued afterwards.
    pub fn close(&self) -> Result<()> {
        let mut guard = self.session.write().unwrap_or_else(PoisonError::into_inner);
        match guard.take() {
            Some(session) => {
                drop(session);
                debug!(base_url = %self.base_url, "roblox client closed");
                Ok(())
            }
            None => Err(RobloxError::ClientClosed),
        }
    }

    /// Perform one logical exchange.
    ///
    /// A 403 carrying a CSRF challenge is answered by storing the token and resending the
    /// request once; the second response is classified like any other.
    pub async fn execute(&self, route: &Route, body: Option<&Value>) -> Result<ApiResponse> {
        let response = self.send(route, body).await?;

        if response.status() == StatusCode::FORBIDDEN {
            if let Some(token) = response.headers().get(CSRF_RESPONSE_HEADER).cloned() {
                info!(route = %route, "csrf challenge received, retrying once");
                self.store_csrf_token(token)?;
                let retried = self.send(route, body).await?;
                return classify(route, retried).await;
            }
        }

        classify(route, response).await
    }

    /// Execute and deserialize a JSON body into `T`; a 400 becomes `WrongDataPassed`
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        route: &Route,
        body: Option<&Value>,
    ) -> Result<T> {
        let response = self.execute(route, body).await?;
        if response.status == StatusCode::BAD_REQUEST {
            return Err(rejected_request(&response.payload, |_: &Value| Ok(())));
        }
        response.payload.decode()
    }

    /// Single mutation point of the session's CSRF state
    fn store_csrf_token(&self, token: HeaderValue) -> Result<()> {
        let mut guard = self.session.write().unwrap_or_else(PoisonError::into_inner);
        let session = guard.as_mut().ok_or(RobloxError::ClientClosed)?;
        session.csrf_token = Some(token);
        Ok(())
    }

    async fn send(&self, route: &Route, body: Option<&Value>) -> Result<reqwest::Response> {
        let url = route.url(&self.base_url)?;

        let builder = {
            let guard = self.session.read().unwrap_or_else(PoisonError::into_inner);
            let session = guard.as_ref().ok_or(RobloxError::ClientClosed)?;
            let mut builder = session
                .http_client
                .request(route.method().clone(), url.clone());
            if let Some(token) = &session.csrf_token {
                builder = builder.header(CSRF_REQUEST_HEADER, token.clone());
            }
            builder
        };
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };

        debug!(method = %route.method(), url = %url, "sending request");
        Ok(builder.send().await?)
    }
}

async fn classify(route: &Route, response: reqwest::Response) -> Result<ApiResponse> {
    let status = response.status();
    debug!(route = %route, status = status.as_u16(), "received response");

    if let Some(err) = classify_status(status) {
        return Err(err);
    }

    let is_json = is_json_content(response.headers());
    let text = response.text().await?;
    if let Some(err) = RobloxError::from_status(status, &text) {
        return Err(err);
    }

    let payload = if is_json && !text.trim().is_empty() {
        Payload::Json(serde_json::from_str(&text)?)
    } else {
        Payload::Text(text)
    };

    Ok(ApiResponse { payload, status })
}

/// Errors decided by the status alone, before the body is read.
///
/// A 403 is left to the body-aware pass since its message comes from the body.
fn classify_status(status: StatusCode) -> Option<RobloxError> {
    if status == StatusCode::FORBIDDEN {
        return None;
    }
    RobloxError::from_status(status, "")
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 120;
    if text.chars().count() <= MAX_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_CHARS).collect();
    truncated.push_str("...");
    truncated
}
