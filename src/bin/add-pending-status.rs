//! Adds the `Pending` status to the `reminders` table's check constraint.
//! Safe to re-run; exits 0 on success and 1 on failure.

use std::process::ExitCode;

use dashboard_migrations::{
	migrations::{self, Migration},
	utils::{config, logger},
};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
	let config = config::parse_config();
	println!(
		"[TRACE]: Configuration read. Running environment set to {}",
		config.environment
	);

	logger::initialize(&config);

	let migration = Migration::AddPendingStatus;
	info!("Starting migration: {}", migration.description());

	if migrations::run(migration, &config).await {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	}
}
