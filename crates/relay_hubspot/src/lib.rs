// --- File: crates/relay_hubspot/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

// Re-export for the main backend
pub use error::HubspotError;
pub use handlers::{CreateContactRequest, HubspotState, RefreshTokenRequest};
pub use routes::routes;
