/*
[INPUT]:  HTTP status codes, error bodies, payload reason codes, transport errors
[OUTPUT]: Closed error taxonomy with classification and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When the API introduces new status semantics or reason codes
*/

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::http::Payload;
use crate::types::{CreatorType, ErrorsResponse, PurchaseResponse, RevokeResponse};

/// Seconds the API asks callers to wait before retrying after a pending transaction
pub const PENDING_TRANSACTION_BACKOFF_SECS: u64 = 60;

const REASON_ALREADY_OWNED: &str = "AlreadyOwned";
const REASON_PENDING_TRANSACTION: &str = "PendingTransactionAlreadyExists";
const ERROR_CODE_ALREADY_REVOKED: &str = "PassAlreadyRevoked";

/// Main error type for the Roblox adapter
#[derive(Error, Debug)]
pub enum RobloxError {
    /// HTTP request failed before a status was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 401: the `.ROBLOSECURITY` token is invalid or missing
    #[error("Invalid ROBLOSECURITY or no authorization passed")]
    Unauthorized,

    /// 403 that could not be satisfied by the CSRF handshake
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404, or a lookup that matched nothing
    #[error("Nothing found")]
    NotFound,

    /// 3xx or any other status the client has no mapping for
    #[error("Unknown status given by the server: {0}")]
    UnknownStatus(u16),

    /// 5xx
    #[error("Internal server error")]
    InternalServerError,

    /// 400 whose body carries no domain reason code
    #[error("Content not accepted by the Roblox API: {0}")]
    WrongDataPassed(String),

    #[error("Gamepass is not for sale")]
    GamepassNotForSale,

    #[error("Gamepass already owned")]
    GamepassAlreadyOwned,

    #[error("Not enough funds")]
    NotEnoughFunds,

    #[error("Gamepass already revoked")]
    GamepassAlreadyRevoked,

    #[error(
        "A pending transaction already exists, wait {PENDING_TRANSACTION_BACKOFF_SECS}s and try again"
    )]
    PendingTransactionAlreadyExists,

    /// Only user creators can be resolved to a full profile
    #[error("Creator of type {creator_type} cannot be resolved to a user")]
    CreatorNotUser { creator_type: CreatorType },

    /// The session was released by `close()`
    #[error("Client session is closed")]
    ClientClosed,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RobloxError {
    /// Classify a response status, `None` when the body should be handed back to the caller.
    ///
    /// 403 is classified here as a plain `Forbidden`; the CSRF challenge is handled by the
    /// client before a response reaches this point. 400 is handed back: its body may carry a
    /// domain reason code.
    pub fn from_status(status: StatusCode, body: &str) -> Option<Self> {
        let code = status.as_u16();
        match code {
            300..=399 => Some(RobloxError::UnknownStatus(code)),
            401 => Some(RobloxError::Unauthorized),
            403 => Some(RobloxError::Forbidden(
                first_error_message(body).unwrap_or_else(|| "forbidden".to_string()),
            )),
            404 => Some(RobloxError::NotFound),
            500.. => Some(RobloxError::InternalServerError),
            _ => None,
        }
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RobloxError::Http(_)
                | RobloxError::InternalServerError
                | RobloxError::PendingTransactionAlreadyExists
        )
    }

    /// Get retry delay in seconds (if retryable)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            RobloxError::PendingTransactionAlreadyExists => Some(PENDING_TRANSACTION_BACKOFF_SECS),
            RobloxError::InternalServerError => Some(1),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, RobloxError::Unauthorized | RobloxError::Forbidden(_))
    }

    /// Check if the caller broke a precondition (no request was or should have been sent)
    pub fn is_precondition_error(&self) -> bool {
        matches!(
            self,
            RobloxError::ClientClosed
                | RobloxError::CreatorNotUser { .. }
                | RobloxError::GamepassNotForSale
        )
    }
}

/// First `errors[].message` of a standard API error body
pub(crate) fn first_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorsResponse>(body)
        .ok()?
        .errors
        .into_iter()
        .next()
        .map(|detail| detail.message)
}

/// Error for a 400 exchange.
///
/// `check` sees the body first so reason codes such as `AlreadyOwned` keep their domain
/// error; otherwise the result is `WrongDataPassed` with the first API error message.
pub(crate) fn rejected_request<T, F>(payload: &Payload, check: F) -> RobloxError
where
    T: DeserializeOwned,
    F: FnOnce(&T) -> Result<()>,
{
    if let Some(outcome) = payload.as_json().and_then(|value| T::deserialize(value).ok()) {
        if let Err(err) = check(&outcome) {
            return err;
        }
    }
    let message = match payload {
        Payload::Json(value) => ErrorsResponse::deserialize(value)
            .ok()
            .and_then(|response| response.errors.into_iter().next())
            .map(|detail| detail.message),
        Payload::Text(text) => first_error_message(text),
    };
    RobloxError::WrongDataPassed(message.unwrap_or_else(|| "bad request".to_string()))
}

/// Map the reason codes of a purchase body to domain outcomes
pub(crate) fn check_purchase(response: &PurchaseResponse) -> Result<()> {
    if response.reason.as_deref() == Some(REASON_ALREADY_OWNED) {
        return Err(RobloxError::GamepassAlreadyOwned);
    }
    if response.shortfall_price.is_some_and(|shortfall| shortfall > 0) {
        return Err(RobloxError::NotEnoughFunds);
    }
    if response.reason.as_deref() == Some(REASON_PENDING_TRANSACTION) {
        return Err(RobloxError::PendingTransactionAlreadyExists);
    }
    Ok(())
}

/// Map the error code of a structured revoke body to domain outcomes
pub(crate) fn check_revoke(response: &RevokeResponse) -> Result<()> {
    if response.error_code.as_deref() == Some(ERROR_CODE_ALREADY_REVOKED) {
        return Err(RobloxError::GamepassAlreadyRevoked);
    }
    Ok(())
}

/// Result type alias for Roblox operations
pub type Result<T> = std::result::Result<T, RobloxError>;
