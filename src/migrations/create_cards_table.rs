use sqlx::Row;
use tracing::{info, warn};

use crate::{query, DatabaseConnection};

/// Creates the `cards` table and its supporting indexes. Every statement is
/// `IF NOT EXISTS`, so re-running against an already-migrated database does
/// nothing.
pub(super) async fn migrate(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Creating cards table...");
	query!(
		r#"
		CREATE TABLE IF NOT EXISTS cards(
			id UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
			user_id INTEGER NOT NULL
				REFERENCES users(id) ON DELETE CASCADE,
			family_member_id INTEGER
				REFERENCES family_members(id) ON DELETE SET NULL,
			card_type VARCHAR(20)
				CHECK (card_type IN ('Credit', 'Debit', 'Prepaid', 'Forex')),
			card_network VARCHAR(20)
				CHECK (
					card_network IN (
						'Visa', 'MasterCard', 'Amex', 'Rupay', 'Diners Club'
					)
				),
			bank_name VARCHAR(100),
			card_holder_name VARCHAR(200),
			card_number VARCHAR(50) NOT NULL,
			expiry_date DATE NOT NULL,
			cvv VARCHAR(10),
			status VARCHAR(20)
				CHECK (
					status IN ('Active', 'Blocked', 'Expired', 'Lost', 'Stolen')
				),
			daily_limit DECIMAL(15, 2),
			bill_generation_date INTEGER
				CHECK (bill_generation_date >= 1 AND bill_generation_date <= 31),
			payment_due_date INTEGER
				CHECK (payment_due_date >= 1 AND payment_due_date <= 31),
			notes TEXT,
			files JSONB DEFAULT '[]'::jsonb,
			created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP,
			updated_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
		);
		"#
	)
	.execute(&mut *connection)
	.await?;

	info!("Creating indexes...");
	query!(
		r#"
		CREATE INDEX IF NOT EXISTS idx_cards_family_member
		ON cards(family_member_id);
		"#
	)
	.execute(&mut *connection)
	.await?;

	query!(
		r#"
		CREATE INDEX IF NOT EXISTS idx_cards_type
		ON cards(card_type);
		"#
	)
	.execute(&mut *connection)
	.await?;

	query!(
		r#"
		CREATE INDEX IF NOT EXISTS idx_cards_status
		ON cards(status);
		"#
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Lists the table's columns back out of `information_schema` and logs them.
/// Diagnostic only; the CREATEs above are the source of truth for success.
pub(super) async fn verify(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Verifying table...");
	let columns = query!(
		r#"
		SELECT column_name, data_type
		FROM information_schema.columns
		WHERE table_name = 'cards'
		ORDER BY ordinal_position;
		"#
	)
	.fetch_all(&mut *connection)
	.await?;

	if columns.is_empty() {
		warn!("Could not find any cards columns in information_schema");
	} else {
		info!("Cards table created with {} columns:", columns.len());
		for column in columns {
			info!(
				"  - {}: {}",
				column.get::<String, _>("column_name"),
				column.get::<String, _>("data_type")
			);
		}
	}

	Ok(())
}
