//! Remote FTP access
//!
//! [`RemoteStore`] is the narrow surface the transfer engine needs from a
//! remote server. [`session::FtpSession`] implements it over a live FTP
//! connection; tests substitute an in-memory fake.

pub mod ops;
pub mod session;

use std::path::Path;

use ferry_common::protocol::RemoteEntry;

use crate::error::GatewayError;

/// Primitive operations against a remote file store
///
/// All paths are remote, `/`-separated and absolute from the FTP root.
/// Implementations are blocking; callers run them on a blocking task.
pub trait RemoteStore {
    /// List the immediate children of a remote directory
    fn list(&mut self, path: &str) -> Result<Vec<RemoteEntry>, GatewayError>;

    /// Whether a remote directory exists
    fn dir_exists(&mut self, path: &str) -> Result<bool, GatewayError>;

    /// Whether a remote file exists
    fn file_exists(&mut self, path: &str) -> Result<bool, GatewayError>;

    /// Create a single remote directory (parent must exist)
    fn create_dir(&mut self, path: &str) -> Result<(), GatewayError>;

    /// Remove a single empty remote directory
    fn remove_dir(&mut self, path: &str) -> Result<(), GatewayError>;

    /// Remove a single remote file
    fn remove_file(&mut self, path: &str) -> Result<(), GatewayError>;

    /// Rename a remote file or directory
    fn rename(&mut self, from: &str, to: &str) -> Result<(), GatewayError>;

    /// Download a remote file into a local file, overwriting it
    fn download_file(&mut self, remote: &str, local: &Path) -> Result<(), GatewayError>;

    /// Upload a local file to a remote path, overwriting it
    fn upload_file(&mut self, local: &Path, remote: &str) -> Result<(), GatewayError>;
}
