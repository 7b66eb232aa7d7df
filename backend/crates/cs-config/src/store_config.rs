use crate::{ConfigError, ConfigErrorResult, DEFAULT_PROPERTIES_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Property file holding the persisted `clearspace.*` keys,
    /// relative to the config directory
    pub properties_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            properties_file: String::from(DEFAULT_PROPERTIES_FILENAME),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.properties_file.trim().is_empty() {
            return Err(ConfigError::store("store.properties_file cannot be empty"));
        }

        let path = Path::new(&self.properties_file);
        if path.is_absolute() || self.properties_file.contains("..") {
            return Err(ConfigError::store(
                "store.properties_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
