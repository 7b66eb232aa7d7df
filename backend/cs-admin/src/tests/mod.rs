
use cs_settings::{ConnectionSettings, MemoryPropertyStore};

pub(crate) fn memory_settings(
    entries: &[(&str, &str)],
) -> (ConnectionSettings<MemoryPropertyStore>, MemoryPropertyStore) {
    let store: MemoryPropertyStore = entries.iter().copied().collect();
    (ConnectionSettings::new(store.clone()), store)
}
