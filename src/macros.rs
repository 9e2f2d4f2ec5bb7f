/// Logs the query about to be executed on the `migrations::queries` target,
/// then hands it off to [`sqlx::query`]. Migration SQL cannot be checked at
/// compile time against a live schema (the schema it runs against is, by
/// definition, the un-migrated one), so this always uses the runtime query API.
#[macro_export]
macro_rules! query (
	($query:literal) => ({
		let mut logged_query = format!("{}", $query).replace("\n", " ").replace("\t", " ");
		while logged_query.contains("  ") {
			logged_query = logged_query.replace("  ", " ");
		}
		logged_query = logged_query.trim().to_string();
		tracing::debug!(target: "migrations::queries", "{}", logged_query);
		sqlx::query($query)
	});
	($query:literal, $($args:expr),*$(,)?) => ({
		let mut logged_query = format!("{}", $query).replace("\n", " ").replace("\t", " ");
		while logged_query.contains("  ") {
			logged_query = logged_query.replace("  ", " ");
		}
		logged_query = logged_query.trim().to_string();
		tracing::debug!(target: "migrations::queries", "{}", logged_query);
		sqlx::query($query)
			$(.bind($args))*
	});
);
