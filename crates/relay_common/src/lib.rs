// --- File: crates/relay_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod handlers; // Shared HTTP request handlers
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod routes; // Shared route definitions

// Re-export the routes function to be used by the backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, validation_error, HttpStatusCode,
    RelayError,
};

// Re-export HTTP utilities for easier access
pub use http::{client::HTTP_CLIENT, map_json_error, IntoHttpResponse};
