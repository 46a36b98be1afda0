mod config;

use std::sync::Arc;

use clap::Parser;
use jobboard_api::maintenance;
use jobboard_storage::JobCollection;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::from_default_env().add_directive("jobboard=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_cli(Cli::parse())?;
    let collection = config.open_collection().await?;
    info!(storage = ?config.storage, db = %config.db_name, "job collection opened");

    let outcome = match config.command {
        Command::Serve => serve(&config, Arc::clone(&collection)).await,
        Command::Seed => maintenance::seed(collection.as_ref())
            .await
            .map(|inserted| info!(inserted, "seed complete"))
            .map_err(Into::into),
    };

    if let Err(err) = collection.close().await {
        warn!(error = %err, "failed to close job collection");
    }
    outcome
}

async fn serve(
    config: &ServerConfig,
    collection: Arc<dyn JobCollection>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = jobboard_api::app_router(collection, &config.api)?;

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(
        base_path = %config.api.base_path,
        maintenance_routes = config.api.maintenance_routes,
        "jobboard server listening on {}",
        config.addr
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("jobboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received, draining connections");
}
