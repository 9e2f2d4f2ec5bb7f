use thiserror::Error as ThisError;

/// Everything that can make a migration run fail. Verification finding
/// nothing is deliberately not here: the schema mutation itself is the source
/// of truth for success, so a verification miss is only logged as a warning.
#[derive(ThisError, Debug)]
pub enum Error {
	#[error("DATABASE_URL not found in the environment or config file")]
	MissingDatabaseUrl,

	#[error("unable to connect to the database: {0}")]
	Connect(sqlx::Error),

	#[error("{0}")]
	Database(#[from] sqlx::Error),
}
