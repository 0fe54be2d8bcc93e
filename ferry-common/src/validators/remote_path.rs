//! Remote path validation
//!
//! Validates remote FTP paths supplied in query strings and move bodies.

/// Maximum length for remote paths in characters
pub const MAX_REMOTE_PATH_LENGTH: usize = 4096;

/// Validation error for remote paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemotePathError {
    /// Path is empty or whitespace only
    Empty,
    /// Path exceeds maximum length
    TooLong,
    /// Path contains null bytes
    ContainsNull,
    /// Path contains invalid characters (control characters)
    InvalidCharacters,
}

impl std::fmt::Display for RemotePathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "the path is empty"),
            Self::TooLong => write!(
                f,
                "the path exceeds the maximum length of {MAX_REMOTE_PATH_LENGTH} characters"
            ),
            Self::ContainsNull => write!(f, "the path contains null bytes"),
            Self::InvalidCharacters => write!(f, "the path contains control characters"),
        }
    }
}

impl std::error::Error for RemotePathError {}

/// Validate a remote path from the client
///
/// Checks:
/// - Not empty or whitespace only
/// - Does not exceed maximum length (4096 characters)
/// - No null bytes
/// - No control characters
///
/// Note: This validator does NOT reject `..` segments; the path is sent
/// to the FTP server verbatim and containment is the server's concern.
/// Local staging-directory naming applies its own guard.
///
/// # Errors
///
/// Returns a `RemotePathError` variant describing the validation failure.
pub fn validate_remote_path(path: &str) -> Result<(), RemotePathError> {
    if path.trim().is_empty() {
        return Err(RemotePathError::Empty);
    }

    if path.len() > MAX_REMOTE_PATH_LENGTH {
        return Err(RemotePathError::TooLong);
    }

    for ch in path.chars() {
        if ch == '\0' {
            return Err(RemotePathError::ContainsNull);
        }
        if ch.is_control() {
            return Err(RemotePathError::InvalidCharacters);
        }
    }

    Ok(())
}
