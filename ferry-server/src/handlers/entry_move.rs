//! PUT /api/directories and /api/files - Renames a remote entry

use axum::Json;
use axum::extract::State;

use ferry_common::protocol::{MessageBody, MoveInput};

use super::{checked_path, run_ftp};
use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::ftp::ops;

/// Handle a move/rename request for a file or a directory
///
/// The source is probed as a file first and as a directory second, so a
/// single endpoint serves both entry kinds. A missing source fails with
/// a 400.
pub async fn handle_entry_move(
    State(config): State<SharedConfig>,
    creds: Credentials,
    Json(input): Json<MoveInput>,
) -> Result<Json<MessageBody>, GatewayError> {
    let old_path = checked_path(&input.old_path)?;
    let target_path = checked_path(&input.target_path)?;
    tracing::info!("move {old_path} to {target_path}");

    let response_paths = (old_path.clone(), target_path.clone());
    let moved = run_ftp(&config, creds, move |session| {
        ops::move_entry(session, &old_path, &target_path)
    })
    .await?;

    move_result(moved, &response_paths.0, &response_paths.1).map(Json)
}

/// Translate the move outcome into a response body
fn move_result(moved: bool, old_path: &str, target_path: &str) -> Result<MessageBody, GatewayError> {
    if moved {
        Ok(MessageBody::new(format!("{old_path} moved to {target_path}")))
    } else {
        Err(GatewayError::Rejected(format!(
            "no file or directory at {old_path}"
        )))
    }
}
