//! Local key-value persistence
//!
//! A store holds named string slots. The checklist lives in one slot and is
//! rewritten whole on every save.

use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A local store of named string slots
pub trait KeyValueStore: Send {
    /// Read a slot; `Ok(None)` when the slot has never been written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store backed by a single TOML file
///
/// Each slot is a top-level string entry. Writing a slot rewrites the whole
/// file and keeps the other slots.
pub struct FileKeyValueStore {
    file_path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_table(&self) -> Result<toml::Table> {
        if !self.file_path.exists() {
            return Ok(toml::Table::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(table)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let table = self.read_table()?;
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(anyhow!(
                "Slot '{}' holds a {} instead of a string",
                key,
                other.type_str()
            )),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut table = match self.read_table() {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(error = %e, "replacing unreadable store file");
                toml::Table::new()
            }
        };
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        let content = toml::to_string_pretty(&table).context("Failed to encode store file")?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}

/// In-memory key-value store
///
/// Clones share the same slots, so a caller can keep a handle and inspect
/// what an owner of another clone wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("missing.toml"));
        assert_eq!(store.get("paranoia_items").unwrap(), None);
    }

    #[test]
    fn test_set_keeps_other_slots() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();

        let mut store = FileKeyValueStore::new(&path);
        store.set("paranoia_items", "[]").unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("paranoia_items").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_non_string_slot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.toml");
        fs::write(&path, "paranoia_items = 3\n").unwrap();

        let store = FileKeyValueStore::new(&path);
        assert!(store.get("paranoia_items").is_err());
    }

    #[test]
    fn test_corrupt_file_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let mut store = FileKeyValueStore::new(&path);
        assert!(store.get("paranoia_items").is_err());

        store.set("paranoia_items", "[]").unwrap();
        assert_eq!(store.get("paranoia_items").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store_clones_share_slots() {
        let handle = MemoryKeyValueStore::new();
        let mut owner = handle.clone();
        owner.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
    }
}
