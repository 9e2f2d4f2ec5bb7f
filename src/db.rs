use sqlx::Connection;

use crate::DatabaseConnection;

/// Connects to the database from a connection string. A migration is a
/// one-shot script holding exactly one connection for its whole lifetime, so
/// no pool is set up here.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, sqlx::Error> {
	DatabaseConnection::connect(database_url).await
}
