//! GET /api/files/download - Downloads a single remote file

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use ferry_common::remote_path;

use super::{PathQuery, checked_path, run_ftp};
use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::ftp::ops;

/// Handle a single-file download request
///
/// The content type is sniffed from the payload's magic bytes; anything
/// unrecognized ships as `application/octet-stream`.
pub async fn handle_file_download(
    State(config): State<SharedConfig>,
    Query(query): Query<PathQuery>,
    creds: Credentials,
) -> Result<Response, GatewayError> {
    let path = checked_path(&query.path)?;
    tracing::info!("download file {path}");

    let name = remote_path::basename(&path).to_string();
    let contents = run_ftp(&config, creds, move |session| {
        ops::download_file(session, &path)
    })
    .await?;

    let Some(bytes) = contents else {
        return Err(GatewayError::NotFound);
    };

    let mime = infer::get(&bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or("application/octet-stream");
    let disposition = format!("attachment; filename=\"{name}\"");
    Ok((
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
