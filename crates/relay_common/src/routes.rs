// --- File: crates/relay_common/src/routes.rs ---

use crate::handlers::health_handler;
use axum::{routing::get, Router};

/// Creates a router containing routes shared by every deployment of the
/// relay, currently just the liveness probe.
pub fn routes() -> Router {
    Router::new().route("/health", get(health_handler))
}
