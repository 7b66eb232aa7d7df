//! Process-wide access to the connection settings.
//!
//! The composition root builds the settings and calls [`install`] once at
//! startup. Code that cannot have the settings passed in explicitly reads
//! them back with [`instance`].

use crate::{ConnectionSettings, PropertyStore, SettingsError, SettingsErrorResult};

use std::sync::{Arc, OnceLock};

use log::debug;

pub type SharedSettings = ConnectionSettings<Box<dyn PropertyStore>>;

static INSTANCE: OnceLock<Arc<SharedSettings>> = OnceLock::new();

/// Install the process-wide settings. Fails if settings were already installed.
pub fn install(settings: SharedSettings) -> SettingsErrorResult<Arc<SharedSettings>> {
    let shared = Arc::new(settings);
    INSTANCE
        .set(Arc::clone(&shared))
        .map_err(|_| SettingsError::global("connection settings are already installed"))?;
    debug!("Installed process-wide connection settings");
    Ok(shared)
}

/// The installed settings, if [`install`] has run.
pub fn instance() -> Option<Arc<SharedSettings>> {
    INSTANCE.get().cloned()
}
