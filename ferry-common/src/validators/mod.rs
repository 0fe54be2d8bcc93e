//! Input validation functions
//!
//! Reusable validators for request inputs. The gateway validates every
//! user-supplied remote path before opening an FTP session; clients can
//! use the same validators for pre-validation.

mod remote_path;

pub use remote_path::{MAX_REMOTE_PATH_LENGTH, RemotePathError, validate_remote_path};
