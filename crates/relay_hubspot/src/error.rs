// --- File: crates/relay_hubspot/src/error.rs ---
use relay_common::{external_service_error, internal_error, validation_error, RelayError};
use thiserror::Error;

/// HubSpot-specific error types.
#[derive(Error, Debug)]
pub enum HubspotError {
    /// No response reached from HubSpot (network, DNS, timeout)
    #[error("HubSpot API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// HubSpot responded with a non-success status
    #[error("HubSpot API returned an error: [{status_code}] {message}")]
    ApiError { status_code: u16, message: String },

    /// Error parsing a HubSpot response body
    #[error("Failed to parse HubSpot API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Client ID or client secret missing from the server configuration
    #[error("Server configuration error: HubSpot client ID or client secret is missing")]
    ConfigError,

    /// Caller did not supply an access token
    #[error("HubSpot access token is missing from the request")]
    MissingAccessToken,

    /// Failed to encode the outbound request body
    #[error("Failed to encode request body: {0}")]
    EncodingError(String),
}

/// Convert HubspotError into the gateway-wide error taxonomy.
impl From<HubspotError> for RelayError {
    fn from(err: HubspotError) -> Self {
        match err {
            HubspotError::RequestError(e) => {
                RelayError::HttpError(format!("HubSpot request error: {}", e))
            }
            HubspotError::ApiError {
                status_code,
                message,
            } => external_service_error("HubSpot API", format!("[{}] {}", status_code, message)),
            HubspotError::ParseError(e) => {
                RelayError::ParseError(format!("HubSpot response parse error: {}", e))
            }
            HubspotError::ConfigError => RelayError::ConfigError(
                "HubSpot client ID or client secret is missing".to_string(),
            ),
            HubspotError::MissingAccessToken => {
                validation_error("Missing contact fields or access token.")
            }
            HubspotError::EncodingError(msg) => internal_error(msg),
        }
    }
}
