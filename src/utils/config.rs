use std::{
	env,
	fmt::{Display, Formatter},
};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Reads the app config: an optional `config/dev` or `config/prod` file
/// (selected by `APP_ENV`, defaulting to dev on debug builds), with
/// environment variables merged on top. The connection string itself comes
/// from `DATABASE_URL`; its absence is left for the migration runner to
/// report, since a missing value is an operator error, not a parse error.
pub fn parse_config() -> AppConfig {
	println!("[TRACE]: Reading config data...");

	let env = if cfg!(debug_assertions) {
		"dev".to_string()
	} else {
		env::var("APP_ENV").unwrap_or_else(|_| "prod".into())
	};

	match env.as_ref() {
		"prod" | "production" => Config::builder()
			.add_source(File::with_name("config/prod").required(false))
			.set_default("environment", "production")
			.expect("unable to set environment to production"),
		"dev" | "development" => Config::builder()
			.add_source(File::with_name("config/dev").required(false))
			.set_default("environment", "development")
			.expect("unable to set environment to development"),
		_ => {
			panic!("Unknown running environment found!");
		}
	}
	.add_source(Environment::default())
	.build()
	.expect("unable to merge with environment variables")
	.try_deserialize()
	.expect("unable to parse settings")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
	pub environment: RunningEnvironment,
	pub database_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunningEnvironment {
	Development,
	Production,
}

impl Display for RunningEnvironment {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			formatter,
			"{}",
			match self {
				RunningEnvironment::Development => "Development",
				RunningEnvironment::Production => "Production",
			}
		)
	}
}

#[cfg(test)]
mod tests {
	use config::Config;

	use super::{AppConfig, RunningEnvironment};

	#[test]
	fn parses_database_url_when_present() {
		let config: AppConfig = Config::builder()
			.set_default("environment", "development")
			.unwrap()
			.set_override("database_url", "postgres://localhost/personal_db")
			.unwrap()
			.build()
			.unwrap()
			.try_deserialize()
			.unwrap();

		assert_eq!(config.environment, RunningEnvironment::Development);
		assert_eq!(
			config.database_url.as_deref(),
			Some("postgres://localhost/personal_db")
		);
	}

	#[test]
	fn missing_database_url_parses_as_none() {
		let config: AppConfig = Config::builder()
			.set_default("environment", "production")
			.unwrap()
			.build()
			.unwrap()
			.try_deserialize()
			.unwrap();

		assert_eq!(config.environment, RunningEnvironment::Production);
		assert!(config.database_url.is_none());
	}
}
