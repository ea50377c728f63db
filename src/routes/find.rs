use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::error::Result;
use crate::response::{json_response, Envelope};
use crate::routes::validation::parse_user_id;
use crate::AppState;

/// Fetch a single user by id
///
/// Returns 400 if the path parameter is not a valid id, 404 if no record
/// exists under it.
pub async fn find_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_user_id(&id)?;

    let user = state.store.get(id)?;

    Ok(json_response(StatusCode::OK, &Envelope::data(user)))
}
