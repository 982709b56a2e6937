// --- File: crates/relay_hubspot/src/handlers.rs ---
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_common::{config_error, map_json_error, validation_error, IntoHttpResponse, RelayError};
use relay_config::AppConfig;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{error, warn};

use crate::logic::{create_contact, refresh_access_token};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- State for HubSpot Handlers ---
// Only needs AppConfig; the reqwest client is the shared static in relay_common.
#[derive(Clone)]
pub struct HubspotState {
    pub config: Arc<AppConfig>,
}

/// Request from the frontend to exchange a refresh token.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RefreshTokenRequest {
    /// The caller-held OAuth refresh token.
    #[serde(rename = "refreshToken", default)]
    #[cfg_attr(feature = "openapi", schema(example = "na1-xxxx-yyyy"))]
    pub refresh_token: Option<String>,
}

/// Request from the frontend to create a CRM contact.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateContactRequest {
    /// Contact properties (email, firstname, ...), forwarded verbatim.
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub fields: Option<Map<String, Value>>,
    /// Access token obtained from the refresh-token endpoint.
    #[serde(rename = "accessToken", default)]
    #[cfg_attr(feature = "openapi", schema(example = "CJr...AQ"))]
    pub access_token: Option<String>,
}

/// 503 with the same flat JSON error body every other failure path uses.
fn service_disabled_response() -> Response {
    warn!("HubSpot relay is disabled by configuration.");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "message": "HubSpot relay is disabled." })),
    )
        .into_response()
}

/// Axum handler for the token-refresh proxy endpoint.
#[axum::debug_handler]
pub async fn refresh_token_handler(
    State(state): State<Arc<HubspotState>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> Result<Json<Value>, Response> {
    if !state.config.use_hubspot {
        return Err(service_disabled_response());
    }

    let Some(refresh_token) = payload.refresh_token.filter(|token| !token.is_empty()) else {
        return Err(validation_error("Missing refresh token in request body.").into_response());
    };

    let Some(hubspot_config) = state.config.hubspot.as_ref() else {
        error!("HubSpot configuration section not loaded.");
        return Err(config_error("HubSpot configuration not loaded.").into_response());
    };

    map_json_error(
        refresh_access_token(hubspot_config, &refresh_token).await,
        |err| {
            error!("Token refresh failed: {}", err);
            RelayError::from(err)
        },
    )
}

/// Axum handler for the create-contact proxy endpoint.
#[axum::debug_handler]
pub async fn create_contact_handler(
    State(state): State<Arc<HubspotState>>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<Value>), Response> {
    if !state.config.use_hubspot {
        return Err(service_disabled_response());
    }

    let (Some(fields), Some(access_token)) = (
        payload.fields,
        payload.access_token.filter(|token| !token.is_empty()),
    ) else {
        return Err(validation_error("Missing contact fields or access token.").into_response());
    };

    let Some(hubspot_config) = state.config.hubspot.as_ref() else {
        error!("HubSpot configuration section not loaded.");
        return Err(config_error("HubSpot configuration not loaded.").into_response());
    };

    match create_contact(hubspot_config, &fields, &access_token).await {
        Ok(contact) => Ok((StatusCode::CREATED, Json(contact))),
        Err(err) => {
            error!("Contact creation failed: {}", err);
            Err(RelayError::from(err).into_http_response())
        }
    }
}
