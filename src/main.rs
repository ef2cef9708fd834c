//! Account Management API - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool (file created if missing)
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Serve on the configured address until SIGINT/SIGTERM

use std::time::Duration;

use account_management_api::{
    AppState, config::Config, db, repository::SqliteAccountRepository, routes,
    shutdown::shutdown_signal,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber.
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(database_url = %config.database_url, "Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Handlers only see the repository trait
    let state = AppState::new(SqliteAccountRepository::new(pool.clone()));
    let app = routes::build_router(state, Duration::from_secs(config.request_timeout_secs));

    // Bind to network address and start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}
