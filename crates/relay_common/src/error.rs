// --- File: crates/relay_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared across the relay.
///
/// Connector crates fold their own error enums into this one via `From`
/// implementations; the gateway turns it into exactly one JSON error body.
#[derive(Error, Debug)]
pub enum RelayError {
    /// No response was obtained from the upstream (network, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The upstream responded but its body could not be parsed
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Required server-side configuration is missing or incomplete
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The caller omitted or malformed a required request field
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The upstream responded with a non-success status
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Failure inside the relay itself
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for RelayError {
    fn status_code(&self) -> u16 {
        match self {
            // Caller-fixable: the request itself was incomplete.
            RelayError::ValidationError(_) => 400,
            // Everything else collapses to 500 for the caller; the
            // distinction lives in the message text and the server log.
            RelayError::HttpError(_)
            | RelayError::ParseError(_)
            | RelayError::ConfigError(_)
            | RelayError::ExternalServiceError { .. }
            | RelayError::InternalError(_) => 500,
        }
    }
}

// Utility constructors used at the handler boundary.
pub fn config_error<T: fmt::Display>(message: T) -> RelayError {
    RelayError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> RelayError {
    RelayError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> RelayError {
    RelayError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> RelayError {
    RelayError::InternalError(message.to_string())
}
