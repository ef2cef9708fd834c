//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Creating and managing a file-backed SQLite connection pool
//! - Running database migrations automatically

use std::{str::FromStr, time::Duration};

use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

/// Type alias for SQLite connection pool.
pub type DbPool = Pool<Sqlite>;

/// How long a writer waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a new SQLite connection pool.
///
/// The database file is created if it does not exist yet. WAL mode lets
/// readers proceed while a write is in progress, and the busy timeout makes
/// concurrent writers queue on SQLite's lock instead of failing with
/// `SQLITE_BUSY`.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://accounts.db`
/// * `max_connections` - upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if:
/// - The connection string is invalid
/// - The database file cannot be opened or created
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in the `_sqlx_migrations` table, so each one runs
/// only once. Running this on every startup creates the schema on first boot
/// and is a no-op afterwards.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro reads migrations at compile time from ./migrations directory
    sqlx::migrate!("./migrations").run(pool).await
}
