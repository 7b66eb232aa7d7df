use crate::PropertyStore;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// In-memory property store.
///
/// Clones share the same map, so a test can hand one clone to
/// [`ConnectionSettings`](crate::ConnectionSettings) and inspect the
/// written values through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPropertyStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryPropertyStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.write().remove(key);
    }
}
