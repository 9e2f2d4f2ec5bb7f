use sqlx::Row;
use tracing::{info, warn};

use crate::{query, DatabaseConnection};

/// Widens the allowed `reminders.status` set to include `Pending`.
///
/// The ordering here is load-bearing: existing lowercase `pending` rows must
/// be normalized while no constraint is in place, because the re-added
/// constraint is strictly narrower and would reject them.
pub(super) async fn migrate(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Dropping existing status constraint...");
	query!(
		r#"
		ALTER TABLE reminders
		DROP CONSTRAINT IF EXISTS reminders_status_check;
		"#
	)
	.execute(&mut *connection)
	.await?;

	info!("Updating existing 'pending' status to 'Pending'...");
	let updated_rows = query!(
		r#"
		UPDATE reminders
		SET status = 'Pending'
		WHERE status = 'pending';
		"#
	)
	.execute(&mut *connection)
	.await?
	.rows_affected();
	if updated_rows > 0 {
		info!("Updated {} reminders from 'pending' to 'Pending'", updated_rows);
	}

	info!("Adding new status constraint with 'Pending'...");
	query!(
		r#"
		ALTER TABLE reminders
		ADD CONSTRAINT reminders_status_check
		CHECK (status IN ('Active', 'Pending', 'Completed', 'Cancelled'));
		"#
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Looks the constraint back up in `pg_constraint` and logs its definition.
/// Diagnostic only; the ALTERs above are the source of truth for success.
pub(super) async fn verify(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Verifying constraint update...");
	let row = query!(
		r#"
		SELECT
			conname,
			pg_get_constraintdef(oid) AS constraint_definition
		FROM pg_constraint
		WHERE
			conrelid = 'reminders'::regclass AND
			conname = 'reminders_status_check';
		"#
	)
	.fetch_optional(&mut *connection)
	.await?;

	match row {
		Some(row) => {
			info!(
				"Constraint updated: {}",
				row.get::<String, _>("constraint_definition")
			);
		}
		None => {
			warn!("Could not find reminders_status_check in pg_constraint");
		}
	}

	Ok(())
}
