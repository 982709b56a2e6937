// --- File: crates/relay_hubspot/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use serde_json::json;
use utoipa::OpenApi;

use crate::handlers::{CreateContactRequest, RefreshTokenRequest};

#[utoipa::path(
    post,
    path = "/hubspot/refresh-token", // Path relative to /api
    request_body(content = RefreshTokenRequest, example = json!({
        "refreshToken": "na1-xxxx-yyyy"
    })),
    responses(
        (status = 200, description = "New access/refresh token pair, returned verbatim from HubSpot"),
        (status = 400, description = "Missing refresh token in request body"),
        (status = 500, description = "Configuration, transport, or HubSpot API error")
    ),
    tag = "HubSpot"
)]
fn doc_refresh_token_handler() {}

#[utoipa::path(
    post,
    path = "/hubspot/create-contact", // Path relative to /api
    request_body(content = CreateContactRequest, example = json!({
        "fields": { "email": "jane@example.com", "firstname": "Jane" },
        "accessToken": "CJr...AQ"
    })),
    responses(
        (status = 201, description = "Created contact, returned verbatim from HubSpot"),
        (status = 400, description = "Missing contact fields or access token"),
        (status = 500, description = "Transport or HubSpot API error")
    ),
    tag = "HubSpot"
)]
fn doc_create_contact_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_refresh_token_handler, doc_create_contact_handler),
    components(schemas(RefreshTokenRequest, CreateContactRequest)),
    tags(
        (name = "HubSpot", description = "HubSpot CRM relay endpoints")
    )
)]
pub struct HubspotApiDoc;
