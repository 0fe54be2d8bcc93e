//! Command-line argument parsing

use clap::Parser;
use ferry_common::{DEFAULT_FTP_PORT, DEFAULT_PORT};
use std::net::IpAddr;
use std::path::PathBuf;

/// Ferry FTP Gateway Server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// IP address to bind to (IPv4 or IPv6)
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Hostname or address of the remote FTP server
    #[arg(long = "ftp-host", default_value = "127.0.0.1")]
    pub ftp_host: String,

    /// Port of the remote FTP server
    #[arg(long = "ftp-port", default_value_t = DEFAULT_FTP_PORT)]
    pub ftp_port: u16,

    /// Staging directory for in-flight transfers (default: system temp dir)
    #[arg(short = 's', long = "staging-dir")]
    pub staging_dir: Option<PathBuf>,

    /// Enable debug logging (shows per-request FTP activity)
    #[arg(long)]
    pub debug: bool,
}
