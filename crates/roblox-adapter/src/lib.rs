/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Roblox adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod roblox;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiResponse,
    ClientConfig,
    Credentials,
    Payload,
    Result,
    RobloxClient,
    RobloxError,
    Route,
    Service,
};

pub use roblox::Roblox;

// Re-export all types
pub use types::*;
