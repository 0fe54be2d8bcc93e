//! Shared test helpers
//!
//! [`FakeRemote`] is an in-memory [`RemoteStore`] so the operation and
//! transfer layers can be exercised without a live FTP server. It tracks
//! every mutating call so tests can assert that failed or refused
//! operations left the remote untouched.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ferry_common::protocol::{EntryKind, RemoteEntry};
use ferry_common::remote_path;
use ferry_server::error::GatewayError;
use ferry_server::ftp::RemoteStore;

/// In-memory remote file store
#[derive(Debug, Default)]
pub struct FakeRemote {
    pub dirs: BTreeSet<String>,
    pub files: BTreeMap<String, Vec<u8>>,
    /// Remote file path whose transfer fails with an i/o error
    pub fail_on: Option<String>,
    /// Count of mutating calls (create, remove, rename, upload)
    pub mutations: usize,
}

impl FakeRemote {
    pub fn new() -> Self {
        let mut remote = Self::default();
        remote.dirs.insert("/".to_string());
        remote
    }

    pub fn add_dir(&mut self, path: &str) {
        self.dirs.insert(path.to_string());
    }

    pub fn add_file(&mut self, path: &str, contents: &[u8]) {
        self.files.insert(path.to_string(), contents.to_vec());
    }

    fn check_fail(&self, path: &str) -> Result<(), GatewayError> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(GatewayError::Io(std::io::Error::other(
                "simulated network drop",
            )));
        }
        Ok(())
    }
}

fn parent(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some(("", _)) => "/",
        Some((rest, _)) => rest,
        None => "",
    }
}

impl RemoteStore for FakeRemote {
    fn list(&mut self, path: &str) -> Result<Vec<RemoteEntry>, GatewayError> {
        let mut entries = Vec::new();
        for dir in &self.dirs {
            if dir != path && parent(dir) == path {
                entries.push(RemoteEntry {
                    name: remote_path::basename(dir).to_string(),
                    path: dir.clone(),
                    kind: EntryKind::Directory,
                    size: 0,
                });
            }
        }
        for (file, contents) in &self.files {
            if parent(file) == path {
                entries.push(RemoteEntry {
                    name: remote_path::basename(file).to_string(),
                    path: file.clone(),
                    kind: EntryKind::File,
                    size: contents.len() as u64,
                });
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn dir_exists(&mut self, path: &str) -> Result<bool, GatewayError> {
        Ok(self.dirs.contains(path))
    }

    fn file_exists(&mut self, path: &str) -> Result<bool, GatewayError> {
        Ok(self.files.contains_key(path))
    }

    fn create_dir(&mut self, path: &str) -> Result<(), GatewayError> {
        self.mutations += 1;
        self.dirs.insert(path.to_string());
        Ok(())
    }

    fn remove_dir(&mut self, path: &str) -> Result<(), GatewayError> {
        self.mutations += 1;
        self.dirs.remove(path);
        Ok(())
    }

    fn remove_file(&mut self, path: &str) -> Result<(), GatewayError> {
        self.mutations += 1;
        self.files.remove(path);
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<(), GatewayError> {
        self.mutations += 1;
        if let Some(contents) = self.files.remove(from) {
            self.files.insert(to.to_string(), contents);
            return Ok(());
        }
        if self.dirs.remove(from) {
            self.dirs.insert(to.to_string());
            let prefix = format!("{from}/");
            let moved_dirs: Vec<String> = self
                .dirs
                .iter()
                .filter(|d| d.starts_with(&prefix))
                .cloned()
                .collect();
            for dir in moved_dirs {
                self.dirs.remove(&dir);
                self.dirs.insert(format!("{to}{}", &dir[from.len()..]));
            }
            let moved_files: Vec<String> = self
                .files
                .keys()
                .filter(|f| f.starts_with(&prefix))
                .cloned()
                .collect();
            for file in moved_files {
                let contents = self.files.remove(&file).unwrap();
                self.files.insert(format!("{to}{}", &file[from.len()..]), contents);
            }
            return Ok(());
        }
        Err(GatewayError::Rejected(format!("no such entry: {from}")))
    }

    fn download_file(&mut self, remote: &str, local: &Path) -> Result<(), GatewayError> {
        self.check_fail(remote)?;
        let contents = self
            .files
            .get(remote)
            .ok_or_else(|| GatewayError::Rejected(format!("no such file: {remote}")))?;
        std::fs::write(local, contents)?;
        Ok(())
    }

    fn upload_file(&mut self, local: &Path, remote: &str) -> Result<(), GatewayError> {
        self.check_fail(remote)?;
        self.mutations += 1;
        let contents = std::fs::read(local)?;
        self.files.insert(remote.to_string(), contents);
        Ok(())
    }
}
