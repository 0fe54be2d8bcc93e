//! Single-entry remote operations
//!
//! Each function performs one REST-visible operation against a
//! [`RemoteStore`], probing for existence first so that callers can
//! distinguish "did nothing" from "failed". Boolean results mirror the
//! probe-act-verify pattern: `false` means the precondition did not hold,
//! errors mean the store refused or the connection broke.

use std::path::Path;

use ferry_common::protocol::RemoteEntry;
use ferry_common::remote_path;

use crate::error::GatewayError;
use crate::ftp::RemoteStore;

/// List a remote directory, or `None` if it does not exist
pub fn list_directory<S: RemoteStore>(
    store: &mut S,
    path: &str,
) -> Result<Option<Vec<RemoteEntry>>, GatewayError> {
    if !store.dir_exists(path)? {
        return Ok(None);
    }
    store.list(path).map(Some)
}

/// Create a remote directory, creating missing parents along the way
///
/// Verifies the directory exists afterwards; a store that silently
/// swallows the creation surfaces as a rejection.
pub fn add_directory<S: RemoteStore>(store: &mut S, path: &str) -> Result<(), GatewayError> {
    let mut prefix = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if prefix.is_empty() && !path.starts_with('/') {
            prefix = segment.to_string();
        } else {
            prefix = remote_path::join(&prefix, segment);
        }
        if !store.dir_exists(&prefix)? {
            store.create_dir(&prefix)?;
        }
    }
    if !store.dir_exists(path)? {
        return Err(GatewayError::Rejected(format!(
            "the server did not create directory {path}"
        )));
    }
    Ok(())
}

/// Remove a remote directory and everything under it
///
/// Returns `false` without touching the store when the directory does not
/// exist, so repeated deletes are harmless.
pub fn remove_directory<S: RemoteStore>(store: &mut S, path: &str) -> Result<bool, GatewayError> {
    if !store.dir_exists(path)? {
        return Ok(false);
    }
    remove_tree(store, path)?;
    if store.dir_exists(path)? {
        return Err(GatewayError::Rejected(format!(
            "the server did not remove directory {path}"
        )));
    }
    Ok(true)
}

fn remove_tree<S: RemoteStore>(store: &mut S, path: &str) -> Result<(), GatewayError> {
    for entry in store.list(path)? {
        if entry.kind.is_directory() {
            remove_tree(store, &entry.path)?;
        } else {
            store.remove_file(&entry.path)?;
        }
    }
    store.remove_dir(path)
}

/// Remove a remote file
///
/// Returns `false` when the file does not exist.
pub fn remove_file<S: RemoteStore>(store: &mut S, path: &str) -> Result<bool, GatewayError> {
    if !store.file_exists(path)? {
        return Ok(false);
    }
    store.remove_file(path)?;
    if store.file_exists(path)? {
        return Err(GatewayError::Rejected(format!(
            "the server did not remove file {path}"
        )));
    }
    Ok(true)
}

/// Rename a remote file or directory
///
/// The source is probed as a file first, then as a directory. Returns
/// `false` when neither exists.
pub fn move_entry<S: RemoteStore>(
    store: &mut S,
    old_path: &str,
    target_path: &str,
) -> Result<bool, GatewayError> {
    if store.file_exists(old_path)? || store.dir_exists(old_path)? {
        store.rename(old_path, target_path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Upload a single local file to a remote path
///
/// Refuses to overwrite: an existing remote file is a conflict.
pub fn upload_file<S: RemoteStore>(
    store: &mut S,
    local: &Path,
    remote: &str,
) -> Result<(), GatewayError> {
    if store.file_exists(remote)? {
        return Err(GatewayError::Conflict);
    }
    store.upload_file(local, remote)
}

/// Download a single remote file into memory, or `None` if it is missing
pub fn download_file<S: RemoteStore>(
    store: &mut S,
    remote: &str,
) -> Result<Option<Vec<u8>>, GatewayError> {
    if !store.file_exists(remote)? {
        return Ok(None);
    }
    let staged = tempfile::NamedTempFile::new()?;
    store.download_file(remote, staged.path())?;
    let bytes = std::fs::read(staged.path())?;
    Ok(Some(bytes))
}
