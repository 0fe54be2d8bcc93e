//! Per-request FTP credentials
//!
//! Every endpoint authenticates against the remote FTP server with
//! credentials carried in the `USER` and `PASS` request headers. The
//! gateway never stores them; they live for the duration of one request.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::GatewayError;

/// FTP login credentials extracted from request headers
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = header_value(parts, "USER")?;
        let pass = header_value(parts, "PASS")?;
        Ok(Self { user, pass })
    }
}

fn header_value(parts: &Parts, name: &str) -> Result<String, GatewayError> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or(GatewayError::MissingCredentials)
}
