//! Directory transfer engine
//!
//! Directory downloads and uploads both move whole trees through an
//! ephemeral local staging area and a ZIP archive. The staging area is
//! dropped when the orchestrator returns, whether the transfer finished
//! or died mid-walk.

pub mod archive;
pub mod staging;
pub mod walk;

use std::path::Path;

use ferry_common::protocol::RemoteEntry;
use ferry_common::remote_path;

use crate::error::GatewayError;
use crate::ftp::{RemoteStore, ops};
use staging::StagingArea;

/// Download a remote directory tree as a ZIP archive
///
/// Returns `None` when the remote directory does not exist. The staged
/// tree lives under a subdirectory named after the remote directory, so
/// the archive's entries carry only paths relative to it.
pub fn download_directory<S: RemoteStore>(
    store: &mut S,
    path: &str,
    staging_root: &Path,
) -> Result<Option<Vec<u8>>, GatewayError> {
    if !store.dir_exists(path)? {
        return Ok(None);
    }
    let staging = StagingArea::create(staging_root, remote_path::basename(path))?;
    walk::download_tree(store, path, staging.dir())?;
    archive::pack(staging.dir()).map(Some)
}

/// Upload a ZIP archive as a new remote directory tree
///
/// Returns `None` when the target directory already exists; nothing is
/// transferred in that case. On success the new directory's listing is
/// returned.
pub fn upload_directory<S: RemoteStore>(
    store: &mut S,
    path: &str,
    archive_bytes: &[u8],
    staging_root: &Path,
) -> Result<Option<Vec<RemoteEntry>>, GatewayError> {
    if store.dir_exists(path)? {
        return Ok(None);
    }
    let staging = StagingArea::create(staging_root, remote_path::basename(path))?;
    archive::unpack(archive_bytes, staging.dir())?;
    ops::add_directory(store, path)?;
    walk::upload_tree(store, staging.dir(), path)?;
    store.list(path).map(Some)
}
