//! DELETE /api/files - Removes a remote file

use axum::Json;
use axum::extract::{Query, State};

use ferry_common::protocol::MessageBody;

use super::{PathQuery, checked_path, run_ftp};
use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::ftp::ops;

/// Handle a file removal request
///
/// Like directory removal, deleting a missing file fails with a 400 and
/// leaves the server untouched.
pub async fn handle_file_remove(
    State(config): State<SharedConfig>,
    Query(query): Query<PathQuery>,
    creds: Credentials,
) -> Result<Json<MessageBody>, GatewayError> {
    let path = checked_path(&query.path)?;
    tracing::info!("remove file {path}");

    let response_path = path.clone();
    let removed = run_ftp(&config, creds, move |session| {
        ops::remove_file(session, &path)
    })
    .await?;

    removal_result(removed, &response_path).map(Json)
}

/// Translate the removal outcome into a response body
fn removal_result(removed: bool, path: &str) -> Result<MessageBody, GatewayError> {
    if removed {
        Ok(MessageBody::new(format!("file {path} removed")))
    } else {
        Err(GatewayError::Rejected(format!("file {path} does not exist")))
    }
}
