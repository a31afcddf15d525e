use std::sync::Arc;

use tracing::info;

pub mod catalog;
pub mod catalogs;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod seed;

use crate::catalog::{CatalogError, CatalogService, CatalogSpec};
use crate::config::Config;

/// Shared application state. The catalog is read-only, so an `Arc` is all the
/// sharing it needs.
pub struct AppState<C: CatalogSpec> {
    pub catalog: Arc<CatalogService<C>>,
}

impl<C: CatalogSpec> AppState<C> {
    pub fn load() -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: Arc::new(CatalogService::load()?),
        })
    }
}

impl<C: CatalogSpec> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

/// Entry point shared by the service binaries.
pub async fn run<C: CatalogSpec>() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    logging::init()?;

    let config = Config::from_env(C::DEFAULT_PORT)?;

    let state = AppState::<C>::load()?;
    info!(
        logger = C::SERVICE_NAME,
        records = state.catalog.catalog().len(),
        resource = C::RESOURCE,
        "Catalog loaded"
    );

    let app = routes::build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(logger = C::SERVICE_NAME, "Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(C::SERVICE_NAME))
        .await?;

    info!(logger = C::SERVICE_NAME, "Shut down");
    Ok(())
}

async fn shutdown_signal(service: &'static str) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(logger = service, error = %err, "Failed to listen for Ctrl-C");
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
                tracing::error!(logger = service, error = %err, "Failed to listen for SIGTERM");
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

    info!(logger = service, "Shutdown signal received");
}
