use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metro_server::config::{DirectorySource, ServerConfig};
use metro_server::directory::{FixtureDirectory, PgStationDirectory};
use metro_server::schedule::SystemClock;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Kept aside so the pool can be drained after the server stops
    let mut pool_handle = None;

    let state = match &config.directory {
        DirectorySource::Fixture(path) => {
            let directory = FixtureDirectory::load(path)?;
            info!(
                path = %path.display(),
                stations = directory.len(),
                "Serving stations from fixture file"
            );
            AppState::new(directory, SystemClock)
        }
        DirectorySource::Postgres(pg) => {
            let directory = PgStationDirectory::connect(pg).await?;
            if config.run_migrations {
                directory.migrate().await?;
            }
            let directory = Arc::new(directory);
            pool_handle = Some(Arc::clone(&directory));
            AppState {
                directory,
                clock: Arc::new(SystemClock),
            }
        }
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Metro schedule server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(directory) = pool_handle {
        directory.close().await;
    }
    info!("Server stopped");

    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
