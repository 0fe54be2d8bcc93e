//! FTP session lifecycle
//!
//! One [`FtpSession`] is opened per REST request and closed when the
//! operation completes, success or failure. Connections are never pooled
//! or reused across requests.

use std::fs::File;
use std::path::Path;

use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};

use ferry_common::protocol::{EntryKind, RemoteEntry};
use ferry_common::remote_path;

use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::ftp::RemoteStore;

/// A live, logged-in connection to the remote FTP server
pub struct FtpSession {
    stream: FtpStream,
}

impl FtpSession {
    /// Connect and log in with the supplied credentials
    ///
    /// Transfers are switched to binary mode immediately so that archive
    /// and file payloads survive the trip unmodified.
    pub fn open(host: &str, port: u16, creds: &Credentials) -> Result<Self, GatewayError> {
        let mut stream =
            FtpStream::connect(format!("{host}:{port}")).map_err(GatewayError::Connection)?;
        stream
            .login(&creds.user, &creds.pass)
            .map_err(GatewayError::Connection)?;
        stream
            .transfer_type(FileType::Binary)
            .map_err(GatewayError::Connection)?;
        tracing::debug!("FTP session opened to {host}:{port} as {}", creds.user);
        Ok(Self { stream })
    }

    /// Close the session, ignoring errors from the QUIT exchange
    pub fn close(&mut self) {
        if let Err(e) = self.stream.quit() {
            tracing::debug!("error closing FTP session: {e}");
        }
    }
}

impl RemoteStore for FtpSession {
    fn list(&mut self, path: &str) -> Result<Vec<RemoteEntry>, GatewayError> {
        let lines = self.stream.list(Some(path))?;
        let mut entries = Vec::with_capacity(lines.len());
        for line in &lines {
            let file = suppaftp::list::File::try_from(line.as_str())
                .map_err(|e| GatewayError::Internal(format!("unparseable LIST line: {e}")))?;
            let name = file.name().to_string();
            if name == "." || name == ".." {
                continue;
            }
            let kind = if file.is_directory() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(RemoteEntry {
                path: remote_path::join(path, &name),
                name,
                kind,
                size: file.size() as u64,
            });
        }
        Ok(entries)
    }

    fn dir_exists(&mut self, path: &str) -> Result<bool, GatewayError> {
        let previous = self.stream.pwd()?;
        match self.stream.cwd(path) {
            Ok(()) => {
                self.stream.cwd(&previous)?;
                Ok(true)
            }
            Err(FtpError::UnexpectedResponse(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn file_exists(&mut self, path: &str) -> Result<bool, GatewayError> {
        match self.stream.size(path) {
            Ok(_) => Ok(true),
            Err(FtpError::UnexpectedResponse(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn create_dir(&mut self, path: &str) -> Result<(), GatewayError> {
        self.stream.mkdir(path)?;
        Ok(())
    }

    fn remove_dir(&mut self, path: &str) -> Result<(), GatewayError> {
        self.stream.rmdir(path)?;
        Ok(())
    }

    fn remove_file(&mut self, path: &str) -> Result<(), GatewayError> {
        self.stream.rm(path)?;
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<(), GatewayError> {
        self.stream.rename(from, to)?;
        Ok(())
    }

    fn download_file(&mut self, remote: &str, local: &Path) -> Result<(), GatewayError> {
        let buffer = self.stream.retr_as_buffer(remote)?;
        std::fs::write(local, buffer.into_inner())?;
        Ok(())
    }

    fn upload_file(&mut self, local: &Path, remote: &str) -> Result<(), GatewayError> {
        let mut file = File::open(local)?;
        self.stream.put_file(remote, &mut file)?;
        Ok(())
    }
}
