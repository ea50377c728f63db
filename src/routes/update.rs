use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::error::{ApiError, Result};
use crate::models::UserDraft;
use crate::response::{json_response, Envelope};
use crate::routes::validation::{parse_user_id, validate_replacement};
use crate::AppState;

/// Replace an existing user
///
/// All three text fields are required and overwrite the stored record; the
/// id from the path is preserved regardless of the body. Existence is
/// checked before the body is read, so an unknown id yields 404 even when
/// the body is malformed.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response> {
    let id = parse_user_id(&id)?;

    state.store.get(id)?;

    let draft: UserDraft = serde_json::from_slice(&body).map_err(|_| ApiError::MalformedBody)?;

    validate_replacement(&draft)?;

    let user = state.store.replace(id, draft)?;
    tracing::info!("User updated: {}", user.id);

    Ok(json_response(StatusCode::OK, &Envelope::data(user)))
}
