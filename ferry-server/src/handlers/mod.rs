//! REST request handlers
//!
//! One module per endpoint operation. Handlers validate input, open one
//! FTP session on a blocking task, run the operation, and translate the
//! outcome into an HTTP response.

mod dir_create;
mod dir_download;
mod dir_list;
mod dir_remove;
mod dir_upload;
mod entry_move;
mod file_download;
mod file_remove;
mod file_upload;

pub use dir_create::handle_directory_create;
pub use dir_download::handle_directory_download;
pub use dir_list::handle_directory_list;
pub use dir_remove::handle_directory_remove;
pub use dir_upload::handle_directory_upload;
pub use entry_move::handle_entry_move;
pub use file_download::handle_file_download;
pub use file_remove::handle_file_remove;
pub use file_upload::handle_file_upload;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use ferry_common::validators::validate_remote_path;

use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::ftp::session::FtpSession;

/// Largest accepted request body (archives and file uploads)
const MAX_BODY_BYTES: usize = 1024 * 1024 * 1024;

/// Build the gateway's route table
pub fn router(config: SharedConfig) -> Router {
    Router::new()
        .route(
            "/api/directories",
            get(handle_directory_list)
                .post(handle_directory_create)
                .put(handle_entry_move)
                .delete(handle_directory_remove),
        )
        .route("/api/directories/download", get(handle_directory_download))
        .route("/api/directories/upload", post(handle_directory_upload))
        .route(
            "/api/files",
            post(handle_file_upload)
                .put(handle_entry_move)
                .delete(handle_file_remove),
        )
        .route("/api/files/download", get(handle_file_download))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Query string carrying the remote path an operation targets
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub path: String,
}

/// Validate a client-supplied remote path
pub(crate) fn checked_path(path: &str) -> Result<String, GatewayError> {
    validate_remote_path(path).map_err(|e| GatewayError::InvalidPath(e.to_string()))?;
    Ok(path.to_string())
}

/// Run a blocking FTP operation inside a fresh session
///
/// The session is opened with the request's credentials, handed to `op`,
/// and closed once `op` returns, regardless of the outcome.
pub(crate) async fn run_ftp<T, F>(
    config: &SharedConfig,
    creds: Credentials,
    op: F,
) -> Result<T, GatewayError>
where
    T: Send + 'static,
    F: FnOnce(&mut FtpSession) -> Result<T, GatewayError> + Send + 'static,
{
    let host = config.ftp_host.clone();
    let port = config.ftp_port;
    tokio::task::spawn_blocking(move || {
        let mut session = FtpSession::open(&host, port, &creds)?;
        let result = op(&mut session);
        session.close();
        result
    })
    .await
    .map_err(|e| GatewayError::Internal(format!("blocking task failed: {e}")))?
}
