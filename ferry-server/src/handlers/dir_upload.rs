//! POST /api/directories/upload - Uploads a ZIP archive as a remote directory

use axum::Json;
use axum::extract::{Multipart, Query, State};

use ferry_common::protocol::RemoteEntry;

use super::{PathQuery, checked_path, run_ftp};
use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::transfer;

/// Handle a directory upload request
///
/// The multipart body must carry one `archive` field with a ZIP payload.
/// The target directory must not exist yet; the response is the listing
/// of the freshly created tree.
pub async fn handle_directory_upload(
    State(config): State<SharedConfig>,
    Query(query): Query<PathQuery>,
    creds: Credentials,
    multipart: Multipart,
) -> Result<Json<Vec<RemoteEntry>>, GatewayError> {
    let path = checked_path(&query.path)?;
    let bytes = read_field(multipart, "archive").await?;
    tracing::info!("upload directory {path} ({} archive bytes)", bytes.len());

    let staging_root = config.staging_root.clone();
    let listing = run_ftp(&config, creds, move |session| {
        transfer::upload_directory(session, &path, &bytes, &staging_root)
    })
    .await?;

    match listing {
        Some(entries) => Ok(Json(entries)),
        None => Err(GatewayError::Conflict),
    }
}

/// Pull the named field out of a multipart body
pub(super) async fn read_field(
    mut multipart: Multipart,
    name: &str,
) -> Result<Vec<u8>, GatewayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::Rejected(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some(name) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| GatewayError::Rejected(format!("invalid multipart body: {e}")))?;
            return Ok(bytes.to_vec());
        }
    }
    Err(GatewayError::Rejected(format!(
        "missing multipart field: {name}"
    )))
}
