//! POST /api/directories - Creates a remote directory

use axum::Json;
use axum::extract::{Query, State};

use ferry_common::protocol::MessageBody;

use super::{PathQuery, checked_path, run_ftp};
use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::ftp::ops;

/// Handle a directory creation request
///
/// Missing parents are created along the way, like `mkdir -p`.
pub async fn handle_directory_create(
    State(config): State<SharedConfig>,
    Query(query): Query<PathQuery>,
    creds: Credentials,
) -> Result<Json<MessageBody>, GatewayError> {
    let path = checked_path(&query.path)?;
    tracing::info!("create directory {path}");

    let message = format!("directory {path} created");
    run_ftp(&config, creds, move |session| {
        ops::add_directory(session, &path)
    })
    .await?;

    Ok(Json(MessageBody::new(message)))
}
