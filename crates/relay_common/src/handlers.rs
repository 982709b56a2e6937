// --- File: crates/relay_common/src/handlers.rs ---

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. Always answers, regardless of configuration state.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "message": "ok!" }))
}
