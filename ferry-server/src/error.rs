//! Gateway error taxonomy and HTTP status mapping
//!
//! Every fallible operation in the gateway funnels into [`GatewayError`].
//! The REST layer alone decides the HTTP mapping: success is 200,
//! not-found is 404, conflict/invalid input is 400, missing credentials
//! is 401, and everything else (connection, transfer, packing, i/o) is a
//! 500-class server failure. Per-file errors inside a tree walk are never
//! caught or retried individually — they abort the whole operation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use suppaftp::FtpError;
use thiserror::Error;

use ferry_common::ErrorKind;
use ferry_common::protocol::ErrorBody;

/// Errors produced by gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The FTP server could not be reached or rejected the credentials
    #[error("cannot connect to the FTP server: {0}")]
    Connection(#[source] FtpError),

    /// The remote path does not exist for an operation that requires it to
    #[error("the remote path does not exist")]
    NotFound,

    /// The remote path already exists for an operation that requires it not to
    #[error("the remote path already exists")]
    Conflict,

    /// The uploaded blob is not a valid archive or contains malformed entries
    #[error("invalid archive: {0}")]
    CorruptArchive(String),

    /// The local staging tree could not be packed into an archive
    #[error("failed to pack the staging directory: {0}")]
    Pack(String),

    /// A single file or directory operation failed mid-walk
    #[error("transfer failed: {0}")]
    Transfer(#[from] FtpError),

    /// The supplied path failed validation
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The FTP server refused the operation
    #[error("{0}")]
    Rejected(String),

    /// USER or PASS header missing from the request
    #[error("missing USER or PASS header")]
    MissingCredentials,

    /// Local filesystem failure (staging reads/writes)
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected gateway-side failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Machine-readable kind attached to the JSON error body
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection(_) => ErrorKind::Connection,
            Self::NotFound => ErrorKind::NotFound,
            Self::Conflict => ErrorKind::Conflict,
            Self::CorruptArchive(_) => ErrorKind::CorruptArchive,
            Self::Transfer(_) => ErrorKind::Transfer,
            Self::InvalidPath(_) => ErrorKind::InvalidPath,
            Self::Rejected(_) => ErrorKind::Rejected,
            Self::MissingCredentials => ErrorKind::Unauthorized,
            Self::Pack(_) | Self::Io(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// HTTP status code for this error
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict
            | Self::CorruptArchive(_)
            | Self::InvalidPath(_)
            | Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::MissingCredentials => StatusCode::UNAUTHORIZED,
            Self::Connection(_)
            | Self::Transfer(_)
            | Self::Pack(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }
        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind().as_str().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
