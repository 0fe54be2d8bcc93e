//! Ephemeral staging areas
//!
//! Every directory transfer stages its tree on local disk inside a
//! [`StagingArea`]. The area owns a unique temporary directory and removes
//! it when dropped, so staging never leaks even when a transfer fails
//! halfway through.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::GatewayError;

/// A self-cleaning local directory for one in-flight transfer
pub struct StagingArea {
    root: TempDir,
    dir: PathBuf,
}

impl StagingArea {
    /// Create a staging area under `staging_root` with a subdirectory
    /// carrying `name`
    ///
    /// The unique temporary parent keeps concurrent transfers of the same
    /// remote path from colliding; `name` preserves the transferred
    /// directory's own name inside it. An empty `name` stages directly in
    /// the temporary parent.
    pub fn create(staging_root: &Path, name: &str) -> Result<Self, GatewayError> {
        if name.contains('/') || name.contains('\\') || name == ".." {
            return Err(GatewayError::InvalidPath(format!(
                "invalid staging name: {name}"
            )));
        }
        let root = TempDir::new_in(staging_root)?;
        let dir = if name.is_empty() {
            root.path().to_path_buf()
        } else {
            let dir = root.path().join(name);
            std::fs::create_dir(&dir)?;
            dir
        };
        Ok(Self { root, dir })
    }

    /// Path of the staged directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the unique temporary parent
    #[must_use]
    pub fn parent(&self) -> &Path {
        self.root.path()
    }
}
