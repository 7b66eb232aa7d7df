mod property_tests;
mod toml_store;

use crate::{ConnectionSettings, MemoryPropertyStore};

/// Build settings over a memory store seeded with `entries`, returning a
/// handle on the same store for inspection.
pub(crate) fn settings_with(
    entries: &[(&str, &str)],
) -> (ConnectionSettings<MemoryPropertyStore>, MemoryPropertyStore) {
    let store: MemoryPropertyStore = entries.iter().copied().collect();
    let settings = ConnectionSettings::new(store.clone());
    (settings, store)
}
