use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-generated identifier, immutable once assigned
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

impl User {
    /// Build a record from a request payload under the given id
    pub fn from_draft(id: Uuid, draft: UserDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            biography: draft.biography,
        }
    }
}

/// Incoming payload for create and update requests
///
/// Every field defaults to the empty string, so a missing field decodes the
/// same as a blank one and is reported by field validation rather than as a
/// malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDraft {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub biography: String,
}
