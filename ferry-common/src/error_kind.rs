//! Machine-readable error kinds for gateway responses
//!
//! These kinds are serialized to strings in JSON error bodies, allowing
//! clients to make decisions based on the error type without parsing the
//! human-readable message (e.g., prompting for credentials on
//! "unauthorized", retrying on "connection").

use std::fmt;

/// Error kinds attached to every JSON error body
///
/// These mirror the gateway's error taxonomy: conditions detected before
/// touching the FTP server (`InvalidPath`, `Unauthorized`), conditions
/// reported by it (`NotFound`, `Conflict`, `Rejected`), failures of the
/// transfer machinery (`Connection`, `Transfer`, `CorruptArchive`), and
/// everything else (`Internal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The remote path does not exist
    NotFound,

    /// The remote path already exists where it must not
    ///
    /// Returned by directory-archive upload (which never merges into an
    /// existing directory) and single-file upload.
    Conflict,

    /// The supplied path failed validation before any FTP traffic
    InvalidPath,

    /// The uploaded archive is not a valid ZIP or contains malformed entries
    CorruptArchive,

    /// The FTP server could not be reached or rejected the credentials
    Connection,

    /// A file or directory operation failed mid-transfer
    Transfer,

    /// USER or PASS header missing from the request
    Unauthorized,

    /// The FTP server accepted the command but did not carry it out
    Rejected,

    /// Unexpected gateway-side failure
    Internal,
}

impl ErrorKind {
    /// Convert to the string representation used in JSON error bodies
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::InvalidPath => "invalid_path",
            Self::CorruptArchive => "corrupt_archive",
            Self::Connection => "connection",
            Self::Transfer => "transfer",
            Self::Unauthorized => "unauthorized",
            Self::Rejected => "rejected",
            Self::Internal => "internal",
        }
    }

    /// Parse from string (for client-side handling)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "not_found" => Some(Self::NotFound),
            "conflict" => Some(Self::Conflict),
            "invalid_path" => Some(Self::InvalidPath),
            "corrupt_archive" => Some(Self::CorruptArchive),
            "connection" => Some(Self::Connection),
            "transfer" => Some(Self::Transfer),
            "unauthorized" => Some(Self::Unauthorized),
            "rejected" => Some(Self::Rejected),
            "internal" => Some(Self::Internal),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorKind> for String {
    fn from(kind: ErrorKind) -> Self {
        kind.as_str().to_string()
    }
}
