//! DELETE /api/directories - Removes a remote directory tree

use axum::Json;
use axum::extract::{Query, State};

use ferry_common::protocol::MessageBody;

use super::{PathQuery, checked_path, run_ftp};
use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::ftp::ops;

/// Handle a directory removal request
///
/// Removing a directory that does not exist fails with a 400; nothing on
/// the server changes in that case.
pub async fn handle_directory_remove(
    State(config): State<SharedConfig>,
    Query(query): Query<PathQuery>,
    creds: Credentials,
) -> Result<Json<MessageBody>, GatewayError> {
    let path = checked_path(&query.path)?;
    tracing::info!("remove directory {path}");

    let response_path = path.clone();
    let removed = run_ftp(&config, creds, move |session| {
        ops::remove_directory(session, &path)
    })
    .await?;

    removal_result(removed, &response_path).map(Json)
}

/// Translate the removal outcome into a response body
fn removal_result(removed: bool, path: &str) -> Result<MessageBody, GatewayError> {
    if removed {
        Ok(MessageBody::new(format!("directory {path} removed")))
    } else {
        Err(GatewayError::Rejected(format!(
            "directory {path} does not exist"
        )))
    }
}
