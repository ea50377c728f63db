use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::error::{ApiError, Result};
use crate::models::UserDraft;
use crate::response::{json_response, Envelope};
use crate::routes::validation::validate_new_user;
use crate::AppState;

/// Create a new user
///
/// Decodes the body, validates the field length bounds, and stores the
/// record under a freshly generated id.
///
/// Returns 422 if the body does not decode, 400 if a field violates its
/// bounds. The body is decoded by hand rather than through an extractor so
/// that a missing field reads as blank and fails validation, not parsing.
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let draft: UserDraft =
        serde_json::from_slice(&body).map_err(|_| ApiError::UnprocessableBody)?;

    validate_new_user(&draft)?;

    let user = state.store.insert(draft)?;
    tracing::info!("User created: {}", user.id);

    Ok(json_response(StatusCode::CREATED, &Envelope::data(user)))
}
