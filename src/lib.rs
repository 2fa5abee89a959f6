pub mod accounts;
pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::accounts::AccountStore;
use crate::api::{start_server, ApiContext};
use crate::catalog::Catalog;
use crate::config::Config;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = Config::load();

    // A broken reference table is fatal: the service must not start
    // and silently answer no-match for everything.
    let catalog = match Catalog::load(&config.dataset_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Cannot load reference table: {e}");
            return Err(e.into());
        }
    };
    tracing::info!(
        records = catalog.len(),
        path = %config.dataset_path.display(),
        "Reference table loaded"
    );

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let accounts = AccountStore::open(&config.db_path)?;
    tracing::info!(path = %config.db_path.display(), "Account store ready");

    let ctx = ApiContext::new(Arc::new(catalog), accounts);
    let addr = SocketAddr::new(config.host, config.port);
    let mut server = start_server(ctx, addr).await?;
    tracing::info!("Listening on http://{}", server.addr);

    shutdown_signal().await;
    server.shutdown_and_wait().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
