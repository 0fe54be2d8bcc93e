//! Ferry Common Library
//!
//! Shared types and utilities for the Ferry REST-to-FTP gateway.

mod error_kind;
pub mod protocol;
pub mod remote_path;
pub mod validators;

pub use error_kind::ErrorKind;

/// Default port for the gateway's HTTP listener
pub const DEFAULT_PORT: u16 = 8021;

/// Default port of the remote FTP server
pub const DEFAULT_FTP_PORT: u16 = 21;
