use std::time::Duration;

use log::LevelFilter;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Lifetime of the single in-memory SQLite connection; dropping it would
/// drop the database with it
pub const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Creates a database connection pool
///
/// `connect_timeout` bounds how long a single connection attempt may wait for
/// the store before giving up.
pub async fn create_connection(
    database_url: &str,
    connect_timeout: Duration,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .connect_timeout(connect_timeout)
        .acquire_timeout(connect_timeout)
        .sqlx_logging_level(LevelFilter::Debug);

    // Every connection to `sqlite::memory:` opens its own empty database
    if database_url.starts_with("sqlite::memory:") {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME);
    }

    Database::connect(options).await
}
