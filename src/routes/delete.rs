use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::error::Result;
use crate::response::{json_response, Envelope};
use crate::routes::validation::parse_user_id;
use crate::AppState;

/// Delete a user
///
/// Removes the record and returns its last stored value. A second delete of
/// the same id returns 404.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_user_id(&id)?;

    let user = state.store.delete(id)?;
    tracing::info!("User deleted: {}", user.id);

    Ok(json_response(StatusCode::OK, &Envelope::data(user)))
}
