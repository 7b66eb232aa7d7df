use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum SettingsError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid port {value:?}: {source} {location}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML serialize error for {path}: {source}")]
    TomlSerialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}

impl SettingsError {
    /// Create a global-instance error
    #[track_caller]
    pub fn global<S: Into<String>>(message: S) -> Self {
        SettingsError::Generic {
            category: "Global",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a port parse failure with the offending input
    #[track_caller]
    pub fn invalid_port<S: Into<String>>(value: S, source: std::num::ParseIntError) -> Self {
        SettingsError::InvalidPort {
            value: value.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SettingsErrorResult<T> = StdResult<T, SettingsError>;
