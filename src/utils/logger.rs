use tracing::{level_filters::LevelFilter, Dispatch, Level};
use tracing_subscriber::{
	fmt::{format::FmtSpan, Layer as FmtLayer},
	layer::SubscriberExt,
	Layer,
};

use super::config::{AppConfig, RunningEnvironment};

/// Sets up the global default subscriber: compact human-readable lines on the
/// console, scoped to this crate's targets, TRACE in development and DEBUG
/// otherwise.
pub fn initialize(config: &AppConfig) {
	tracing::dispatcher::set_global_default(Dispatch::new(
		tracing_subscriber::registry().with(
			FmtLayer::new()
				.with_span_events(FmtSpan::NONE)
				.event_format(
					tracing_subscriber::fmt::format()
						.with_ansi(true)
						.with_file(false)
						.without_time()
						.compact(),
				)
				.with_filter(
					tracing_subscriber::filter::Targets::new()
						.with_target("dashboard_migrations", LevelFilter::TRACE)
						.with_target("migrations::queries", LevelFilter::TRACE)
						.with_target("add_pending_status", LevelFilter::TRACE)
						.with_target("create_cards_table", LevelFilter::TRACE),
				)
				.with_filter(LevelFilter::from_level(
					if config.environment == RunningEnvironment::Development {
						Level::TRACE
					} else {
						Level::DEBUG
					},
				)),
		),
	))
	.expect("Failed to set global default subscriber");
}
