pub mod config;
pub mod logger;

mod errors;

pub use self::errors::Error;
