//! Linkshelf server binary.
//!
//! Opens the store over the configured data directory and serves the
//! HTTP API until the process is stopped.

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkshelf::api;
use linkshelf::config::ServerConfig;
use linkshelf::storage::FileBackend;
use linkshelf::store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkshelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let backend = FileBackend::new(&config.data_dir);
    let store = Store::open(Arc::new(backend))?;

    let app = api::router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store);

    let addr = config.bind_addr();
    tracing::info!("Data directory: {}", config.data_dir.display());
    tracing::info!("Starting linkshelf on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
