// --- File: crates/relay_hubspot/src/logic.rs ---
use relay_config::HubspotConfig;
use serde_json::{json, Map, Value};
use tracing::{error, info};

use crate::error::HubspotError;

// Shared HTTP client from relay_common
use relay_common::HTTP_CLIENT;

/// Pulls a human-readable message out of an upstream error body.
///
/// HubSpot reports OAuth failures under `error_description` and CRM failures
/// under `message`; callers pass the keys relevant to their endpoint.
fn upstream_error_message(body_text: &str, keys: &[&str]) -> String {
    serde_json::from_str::<Value>(body_text)
        .ok()
        .and_then(|body| {
            keys.iter()
                .find_map(|key| body.get(key).and_then(Value::as_str).map(String::from))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Exchanges a refresh token for a new access/refresh token pair.
///
/// The configured client credentials are authoritative; they are checked
/// before any network call. The upstream token pair is returned verbatim as
/// an opaque JSON value. Exactly one attempt, no retry.
pub async fn refresh_access_token(
    config: &HubspotConfig,
    refresh_token: &str,
) -> Result<Value, HubspotError> {
    let client_id = config
        .client_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(HubspotError::ConfigError)?;
    let client_secret = config
        .client_secret
        .as_deref()
        .filter(|secret| !secret.is_empty())
        .ok_or(HubspotError::ConfigError)?;

    let form_params = [
        ("grant_type", "refresh_token"),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("refresh_token", refresh_token),
        // redirect_uri is not required for the refresh_token grant
    ];
    let request_body = serde_urlencoded::to_string(form_params).map_err(|e| {
        HubspotError::EncodingError(format!("Failed to urlencode token request: {}", e))
    })?;

    let token_endpoint = config.token_endpoint();
    info!("[HubSpot Logic] Requesting token refresh at {}", token_endpoint);

    let response = HTTP_CLIENT
        .post(&token_endpoint)
        .header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(request_body)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if status.is_success() {
        let token_pair: Value = serde_json::from_str(&body_text)?;
        info!("[HubSpot Logic] Token refresh succeeded");
        Ok(token_pair)
    } else {
        let message = upstream_error_message(&body_text, &["error_description", "message"]);
        error!(
            "[HubSpot Logic] Token refresh failed (Status {}): {}",
            status, message
        );
        Err(HubspotError::ApiError {
            status_code: status.as_u16(),
            message,
        })
    }
}

/// Creates a contact in HubSpot on behalf of the caller.
///
/// Caller-supplied fields are passed through verbatim under the `properties`
/// wrapper HubSpot expects; the created-contact body comes back verbatim as
/// an opaque JSON value. Exactly one attempt, no retry.
pub async fn create_contact(
    config: &HubspotConfig,
    fields: &Map<String, Value>,
    access_token: &str,
) -> Result<Value, HubspotError> {
    if access_token.is_empty() {
        return Err(HubspotError::MissingAccessToken);
    }

    let payload = json!({ "properties": fields });

    let contacts_endpoint = config.contacts_endpoint();
    info!("[HubSpot Logic] Creating contact at {}", contacts_endpoint);

    let response = HTTP_CLIENT
        .post(&contacts_endpoint)
        .bearer_auth(access_token)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if status.is_success() {
        let contact: Value = serde_json::from_str(&body_text)?;
        info!("[HubSpot Logic] Contact created");
        Ok(contact)
    } else {
        let message = upstream_error_message(&body_text, &["message"]);
        error!(
            "[HubSpot Logic] Contact creation failed (Status {}): {}",
            status, message
        );
        Err(HubspotError::ApiError {
            status_code: status.as_u16(),
            message,
        })
    }
}
