/// Minimum length of first/last name, in characters after trimming
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum length of first/last name, in characters after trimming
pub const NAME_MAX_CHARS: usize = 20;

/// Minimum length of the biography, in characters after trimming
pub const BIOGRAPHY_MIN_CHARS: usize = 20;

/// Maximum length of the biography, in characters after trimming
pub const BIOGRAPHY_MAX_CHARS: usize = 450;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a first name outside the allowed length
pub const ERR_FIRST_NAME_LENGTH: &str = "first name must be between 2 and 20 characters";

/// Error message for a last name outside the allowed length
pub const ERR_LAST_NAME_LENGTH: &str = "last name must be between 2 and 20 characters";

/// Error message for a biography outside the allowed length
pub const ERR_BIOGRAPHY_LENGTH: &str = "biography must be between 20 and 450 characters";

/// Error message for an update with a blank or missing field
pub const ERR_MISSING_FIELDS: &str = "missing required fields";
