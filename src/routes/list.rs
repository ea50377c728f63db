use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::error::Result;
use crate::response::{json_response, Envelope};
use crate::AppState;

/// List all users
///
/// The payload is always an array, empty when the store is empty. Order is
/// unspecified.
pub async fn list_users(State(state): State<AppState>) -> Result<Response> {
    let users = state.store.list()?;

    Ok(json_response(StatusCode::OK, &Envelope::data(users)))
}
