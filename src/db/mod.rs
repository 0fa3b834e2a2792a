use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;

use crate::config::Config;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection settings for the order database. The file is created on first
/// use.
pub fn connect_options(config: &Config) -> Result<SqliteConnectOptions, sqlx::Error> {
    options_from_url(&config.database_url)
}

pub fn options_from_url(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(database_url)?.create_if_missing(true))
}

/// Opens a single, unpooled connection.
pub async fn open(options: &SqliteConnectOptions) -> Result<SqliteConnection, sqlx::Error> {
    options.connect().await
}

pub async fn run_migrations(options: &SqliteConnectOptions) -> Result<(), sqlx::Error> {
    let mut conn = open(options).await?;
    let result = MIGRATOR.run(&mut conn).await;
    // close on both paths, then surface the migration outcome
    let closed = conn.close().await;
    result?;
    closed?;
    tracing::info!("Database migrations completed");
    Ok(())
}
