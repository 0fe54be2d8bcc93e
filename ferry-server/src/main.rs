//! Ferry FTP Gateway Server

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ferry_server::args::Args;
use ferry_server::config::GatewayConfig;
use ferry_server::handlers;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    let staging_root = args
        .staging_dir
        .unwrap_or_else(std::env::temp_dir);
    if let Err(e) = std::fs::create_dir_all(&staging_root) {
        tracing::error!("cannot create staging directory {}: {e}", staging_root.display());
        std::process::exit(1);
    }

    let config = Arc::new(GatewayConfig {
        ftp_host: args.ftp_host,
        ftp_port: args.ftp_port,
        staging_root,
    });

    let addr = SocketAddr::new(args.bind, args.port);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("cannot bind to {addr}: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "ferryd v{} listening on {addr}, forwarding to {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.ftp_host,
        config.ftp_port
    );

    let app = handlers::router(config);
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "ferryd=debug,ferry_server=debug,tower_http=debug"
    } else {
        "ferryd=info,ferry_server=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("cannot listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("shutting down");
}
