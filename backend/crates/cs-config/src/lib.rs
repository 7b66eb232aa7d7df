mod config;
mod error;
mod log_level;
mod logging_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;

const CONFIG_DIR_ENV: &str = "CS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".clearspace";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_PROPERTIES_FILENAME: &str = "properties.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
