/*
[INPUT]:  HTTP client configuration and Roblox API routes
[OUTPUT]: Classified HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod gamepasses;
pub mod route;
pub mod users;

pub use error::{PENDING_TRANSACTION_BACKOFF_SECS, Result, RobloxError};
pub use route::{DEFAULT_BASE_URL, Route, Service};

pub use client::{ApiResponse, ClientConfig, Credentials, Payload, RobloxClient};
