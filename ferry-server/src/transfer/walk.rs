//! Recursive tree walks between the remote store and local staging
//!
//! Both directions walk depth-first and fail fast: the first error aborts
//! the whole transfer, leaving partial state for the caller's staging
//! area to clean up.

use std::path::Path;

use ferry_common::remote_path;

use crate::error::GatewayError;
use crate::ftp::RemoteStore;

/// Mirror a remote directory tree into a local directory
///
/// `local` must already exist. Children are handled in listing order:
/// subdirectories are created and recursed into, files are downloaded.
pub fn download_tree<S: RemoteStore>(
    store: &mut S,
    remote: &str,
    local: &Path,
) -> Result<(), GatewayError> {
    for entry in store.list(remote)? {
        let target = local.join(&entry.name);
        if entry.kind.is_directory() {
            std::fs::create_dir(&target)?;
            download_tree(store, &entry.path, &target)?;
        } else {
            tracing::debug!("downloading {}", entry.path);
            store.download_file(&entry.path, &target)?;
        }
    }
    Ok(())
}

/// Mirror a local directory tree into a remote directory
///
/// `remote` must already exist. Files at each level are uploaded before
/// subdirectories are created and recursed into.
pub fn upload_tree<S: RemoteStore>(
    store: &mut S,
    local: &Path,
    remote: &str,
) -> Result<(), GatewayError> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(local)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        } else {
            files.push(entry.path());
        }
    }
    files.sort();
    dirs.sort();

    for file in &files {
        let name = entry_name(file)?;
        let target = remote_path::join(remote, &name);
        tracing::debug!("uploading {target}");
        store.upload_file(file, &target)?;
    }
    for dir in &dirs {
        let name = entry_name(dir)?;
        let target = remote_path::join(remote, &name);
        store.create_dir(&target)?;
        upload_tree(store, dir, &target)?;
    }
    Ok(())
}

fn entry_name(path: &Path) -> Result<String, GatewayError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| GatewayError::Internal(format!("non-UTF-8 staging path: {path:?}")))
}
