//! Database connection management.
//!
//! Opens the `SQLite` database named by the configuration and brings its
//! schema up to date by running pending patches.

use crate::errors::Result;
use crate::patches;
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Connects and applies every pending patch.
///
/// # Errors
/// Returns a database error if the connection or any patch fails.
pub async fn connect_and_patch(database_url: &str) -> Result<DatabaseConnection> {
    let db = create_connection(database_url).await?;
    info!("Connected to database");
    patches::run_pending(&db).await?;
    Ok(db)
}
