//! API types for the Ferry gateway
//!
//! All request and response bodies are JSON. Listing entries describe what
//! the FTP server reported for a single directory level; the gateway never
//! caches them across requests.

use serde::{Deserialize, Serialize};

/// Kind of a remote filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    #[must_use]
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// A single entry of a remote directory listing
///
/// `path` is the full remote path (`parent/name`); `name` is the final
/// segment only. `size` is zero for directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
    pub size: u64,
}

/// Request body for moving a file or directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveInput {
    /// Current remote path of the entry
    pub old_path: String,
    /// Remote path the entry should end up at
    pub target_path: String,
}

/// Success body for operations that only report a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSON error body returned for every failed request
///
/// `kind` is one of the machine-readable strings from
/// [`crate::ErrorKind`]; `error` is human-readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
}
