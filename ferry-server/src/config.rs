//! Runtime configuration shared across request handlers

use std::path::PathBuf;
use std::sync::Arc;

/// Immutable gateway configuration, built once at startup
///
/// The gateway itself is stateless: this is the only data shared between
/// requests, and none of it is mutable.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Hostname or address of the remote FTP server
    pub ftp_host: String,
    /// Port of the remote FTP server
    pub ftp_port: u16,
    /// Directory under which per-operation staging areas are created
    pub staging_root: PathBuf,
}

/// Shared handle to the gateway configuration
pub type SharedConfig = Arc<GatewayConfig>;
