//! File-backed property store.
//!
//! Dotted keys map onto nested tables, so `clearspace.host` is stored as
//!
//! ```toml
//! [clearspace]
//! host = "cs.example.org"
//! ```
//!
//! Every `put` and `remove` rewrites the whole file. Write failures are
//! logged and the in-memory table keeps the new value.

use crate::{PropertyStore, SettingsError, SettingsErrorResult};

use std::path::{Path, PathBuf};

use log::{debug, error, warn};
use toml::{Table, Value};

#[derive(Debug)]
pub struct TomlPropertyStore {
    path: PathBuf,
    table: Table,
}

impl TomlPropertyStore {
    /// Open the property file at `path`, starting empty if it doesn't exist yet.
    pub fn open(path: impl Into<PathBuf>) -> SettingsErrorResult<Self> {
        let path = path.into();

        let table = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| SettingsError::Io {
                path: path.clone(),
                source: e,
            })?;

            toml::from_str::<Table>(&contents).map_err(|e| SettingsError::TomlParse {
                path: path.clone(),
                source: e,
            })?
        } else {
            Table::new()
        };

        debug!(
            "Opened property store {} ({} top-level entries)",
            path.display(),
            table.len()
        );

        Ok(Self { path, table })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current table to disk, creating parent directories as needed.
    pub fn save(&self) -> SettingsErrorResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| SettingsError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let contents = toml::to_string(&self.table).map_err(|e| SettingsError::TomlSerialize {
            path: self.path.clone(),
            source: e,
        })?;

        std::fs::write(&self.path, contents).map_err(|e| SettingsError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    fn persist(&self, key: &str) {
        if let Err(e) = self.save() {
            error!("Failed to persist property {key}: {e}");
        }
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let mut value = self.table.get(segments.next()?)?;
        for segment in segments {
            value = value.as_table()?.get(segment)?;
        }
        Some(value)
    }
}

impl PropertyStore for TomlPropertyStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.lookup(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            Value::Datetime(d) => Some(d.to_string()),
            Value::Array(_) | Value::Table(_) => None,
        }
    }

    fn put(&mut self, key: &str, value: &str) {
        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };

        let mut table = &mut self.table;
        for segment in parents.into_iter().flat_map(|p| p.split('.')) {
            let entry = table.entry(segment).or_insert(Value::Table(Table::new()));
            if !entry.is_table() {
                warn!("Property {key}: replacing non-table value at '{segment}'");
                *entry = Value::Table(Table::new());
            }
            let Some(next) = entry.as_table_mut() else {
                return;
            };
            table = next;
        }

        table.insert(leaf.to_string(), Value::String(value.to_string()));
        self.persist(key);
    }

    fn remove(&mut self, key: &str) {
        let segments: Vec<&str> = key.split('.').collect();
        if remove_path(&mut self.table, &segments) {
            self.persist(key);
        }
    }
}

/// Remove the leaf at `segments`, pruning tables left empty. Returns whether
/// anything was removed.
fn remove_path(table: &mut Table, segments: &[&str]) -> bool {
    match segments {
        [] => false,
        [leaf] => table.remove(*leaf).is_some(),
        [head, rest @ ..] => {
            let Some(Value::Table(child)) = table.get_mut(*head) else {
                return false;
            };
            let removed = remove_path(child, rest);
            if removed && child.is_empty() {
                table.remove(*head);
            }
            removed
        }
    }
}
