use uuid::Uuid;

use crate::constants::{
    BIOGRAPHY_MAX_CHARS, BIOGRAPHY_MIN_CHARS, ERR_BIOGRAPHY_LENGTH, ERR_FIRST_NAME_LENGTH,
    ERR_LAST_NAME_LENGTH, ERR_MISSING_FIELDS, NAME_MAX_CHARS, NAME_MIN_CHARS,
};
use crate::error::ApiError;
use crate::models::UserDraft;

/// Parse a path parameter as a user id
pub fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidUserId)
}

/// Length of a field in characters, ignoring surrounding whitespace
fn trimmed_chars(value: &str) -> usize {
    value.trim().chars().count()
}

/// Validate a creation payload against the field length bounds
///
/// Bounds are inclusive and apply to the trimmed value; the stored value
/// keeps whatever whitespace the client sent.
pub fn validate_new_user(draft: &UserDraft) -> Result<(), ApiError> {
    let first_name = trimmed_chars(&draft.first_name);
    if first_name < NAME_MIN_CHARS || first_name > NAME_MAX_CHARS {
        return Err(ApiError::Validation(ERR_FIRST_NAME_LENGTH.to_string()));
    }

    let last_name = trimmed_chars(&draft.last_name);
    if last_name < NAME_MIN_CHARS || last_name > NAME_MAX_CHARS {
        return Err(ApiError::Validation(ERR_LAST_NAME_LENGTH.to_string()));
    }

    let biography = trimmed_chars(&draft.biography);
    if biography < BIOGRAPHY_MIN_CHARS || biography > BIOGRAPHY_MAX_CHARS {
        return Err(ApiError::Validation(ERR_BIOGRAPHY_LENGTH.to_string()));
    }

    Ok(())
}

/// Validate a replacement payload: every field present and not blank
///
/// Length bounds are not re-checked on replacement.
pub fn validate_replacement(draft: &UserDraft) -> Result<(), ApiError> {
    if draft.first_name.trim().is_empty()
        || draft.last_name.trim().is_empty()
        || draft.biography.trim().is_empty()
    {
        return Err(ApiError::Validation(ERR_MISSING_FIELDS.to_string()));
    }

    Ok(())
}
