//! POST /api/files - Uploads a single file

use std::io::Write;

use axum::Json;
use axum::extract::{Multipart, Query, State};

use ferry_common::protocol::MessageBody;

use super::dir_upload::read_field;
use super::{PathQuery, checked_path, run_ftp};
use crate::config::SharedConfig;
use crate::credentials::Credentials;
use crate::error::GatewayError;
use crate::ftp::ops;

/// Handle a single-file upload request
///
/// The multipart body must carry one `file` field. Uploading over an
/// existing remote file is a conflict.
pub async fn handle_file_upload(
    State(config): State<SharedConfig>,
    Query(query): Query<PathQuery>,
    creds: Credentials,
    multipart: Multipart,
) -> Result<Json<MessageBody>, GatewayError> {
    let path = checked_path(&query.path)?;
    let bytes = read_field(multipart, "file").await?;
    tracing::info!("upload file {path} ({} bytes)", bytes.len());

    let message = format!("file {path} uploaded");
    run_ftp(&config, creds, move |session| {
        let mut staged = tempfile::NamedTempFile::new()?;
        staged.write_all(&bytes)?;
        staged.flush()?;
        ops::upload_file(session, staged.path(), &path)
    })
    .await?;

    Ok(Json(MessageBody::new(message)))
}
