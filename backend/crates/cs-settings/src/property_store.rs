/// Key-value backing store for persisted settings.
///
/// Only the three operations the settings need are part of the contract.
/// Writes cannot fail from the caller's point of view: adapters that do I/O
/// log failures instead of returning them.
pub trait PropertyStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn put(&mut self, key: &str, value: &str);

    fn remove(&mut self, key: &str);
}

impl<S: PropertyStore + ?Sized> PropertyStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) {
        (**self).put(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}
