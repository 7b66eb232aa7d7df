use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Config error: {0}")]
    Config(#[from] cs_config::ConfigError),

    #[error("Settings error: {0}")]
    Settings(#[from] cs_settings::SettingsError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl AdminError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        AdminError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert serde_json error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        AdminError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type AdminErrorResult<T> = std::result::Result<T, AdminError>;
