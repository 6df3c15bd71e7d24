//! Library Catalog Server
//!
//! REST API over PostgreSQL for people and the books they hold.

use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppError,
    AppState,
};

const LISTEN_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("library_catalog={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Library Catalog v{}", env!("CARGO_PKG_VERSION"));

    // Open the shared database handle
    let options = config.database.connect_options()?;
    let pool = PgPoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to {}: {}", config.database.describe(), e);
            AppError::Connection(e.to_string())
        })?;

    tracing::info!("Connected to database successfully");

    // Create or alter tables to match the entity declarations
    let repository = Repository::new(pool.clone());
    repository.reconcile_schema().await?;

    tracing::info!("Database schema reconciled");

    let state = AppState {
        services: Arc::new(Services::new(repository)),
    };

    let app = api::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app).await;

    pool.close().await;
    served?;

    Ok(())
}
