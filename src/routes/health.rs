use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// Used by load balancers and monitoring systems. The store lives in
/// process memory, so a responding process is a healthy one.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
