//! One-shot schema migrations for the Personal Dashboard PostgreSQL database.
//!
//! Each migration is a standalone binary that connects using the
//! `DATABASE_URL` from the environment (or a local config file), applies its
//! schema change inside a transaction, verifies the result against the system
//! catalogs, and commits. Re-running a migration is safe: every statement is
//! phrased to be a no-op on an already-migrated database.

/// Database connection establishment.
pub mod db;
/// The `query!` macro used by all migration SQL.
pub mod macros;
/// The migrations themselves, along with the shared runner that drives them.
pub mod migrations;
/// Config parsing, logging setup and the crate's error type.
pub mod utils;

/// The type of the database. A type alias is used here so that it can be
/// referenced everywhere easily.
pub type DatabaseType = sqlx::Postgres;

/// The type of the database connection. A mutable reference to this should be
/// used as the parameter for database functions, since it accepts both a
/// connection and a transaction.
pub type DatabaseConnection = <DatabaseType as sqlx::Database>::Connection;

pub type Result<TValue> = std::result::Result<TValue, utils::Error>;
