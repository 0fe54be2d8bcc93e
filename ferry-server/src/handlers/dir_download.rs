//! GET /api/directories/download - Downloads a remote directory as a ZIP archive

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use ferry_common::remote_path;

use super::{PathQuery, checked_path, run_ftp};
use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::transfer;

/// Handle a directory download request
///
/// The whole remote tree is staged locally, packed, and returned as one
/// `application/zip` body named after the directory.
pub async fn handle_directory_download(
    State(config): State<SharedConfig>,
    Query(query): Query<PathQuery>,
    creds: Credentials,
) -> Result<Response, GatewayError> {
    let path = checked_path(&query.path)?;
    tracing::info!("download directory {path}");

    let name = remote_path::basename(&path).to_string();
    let staging_root = config.staging_root.clone();
    let archive = run_ftp(&config, creds, move |session| {
        transfer::download_directory(session, &path, &staging_root)
    })
    .await?;

    let Some(bytes) = archive else {
        return Err(GatewayError::NotFound);
    };

    let filename = if name.is_empty() { "archive" } else { &name };
    let disposition = format!("attachment; filename=\"{filename}.zip\"");
    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
