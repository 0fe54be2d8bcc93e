//! GET /api/directories - Lists a remote directory

use axum::Json;
use axum::extract::{Query, State};

use ferry_common::protocol::RemoteEntry;

use super::{PathQuery, checked_path, run_ftp};
use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::ftp::ops;

/// Handle a directory listing request
pub async fn handle_directory_list(
    State(config): State<SharedConfig>,
    Query(query): Query<PathQuery>,
    creds: Credentials,
) -> Result<Json<Vec<RemoteEntry>>, GatewayError> {
    let path = checked_path(&query.path)?;
    tracing::info!("list directory {path}");

    let listing = run_ftp(&config, creds, move |session| {
        ops::list_directory(session, &path)
    })
    .await?;

    match listing {
        Some(entries) => Ok(Json(entries)),
        None => Err(GatewayError::NotFound),
    }
}
