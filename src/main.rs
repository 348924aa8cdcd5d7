//! Books API server

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use books_api::{
    api,
    config::AppConfig,
    database,
    repository::SqliteBookStore,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("books_api={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Books API v{}", env!("CARGO_PKG_VERSION"));

    let pool = database::connect(&config.database).await?;
    tracing::info!(url = %config.database.url, "Connected to database");

    let services = Services::new(Arc::new(SqliteBookStore::new(pool)));
    let addr = config.bind_address();

    let state = AppState {
        services: Arc::new(services),
    };

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server started");
    axum::serve(listener, app).await?;

    Ok(())
}
