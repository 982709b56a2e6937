// --- File: crates/relay_hubspot/src/routes.rs ---

use crate::handlers::{create_contact_handler, refresh_token_handler, HubspotState};
use axum::{routing::post, Router};
use relay_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the HubSpot relay feature.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let hubspot_state = Arc::new(HubspotState { config });

    Router::new()
        .route("/hubspot/refresh-token", post(refresh_token_handler))
        .route("/hubspot/create-contact", post(create_contact_handler))
        .with_state(hubspot_state)
}
