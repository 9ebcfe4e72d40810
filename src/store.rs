//! The item store: the single owner of the checklist
//!
//! Every mutation updates memory first and then rewrites the whole checklist
//! into one key-value slot. A failed write is returned to the caller, but the
//! mutation stands; the next successful write (any later mutation, or
//! [`ItemStore::flush`]) saves it.

use crate::checklist::{Checklist, ChecklistItem, ChecklistStats, ItemStatus};
use crate::storage::KeyValueStore;
use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

/// Slot name the checklist is saved under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "paranoia_items";

pub struct ItemStore {
    checklist: Checklist,
    backend: Box<dyn KeyValueStore>,
    key: String,
    unsaved: bool,
}

impl ItemStore {
    /// Load the checklist from the default slot
    pub fn load(backend: impl KeyValueStore + 'static) -> Self {
        Self::load_with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Load the checklist from `key`
    ///
    /// Never fails: a missing slot, a read error or undecodable data all
    /// count as no saved data. An empty checklist is replaced by the default
    /// items. Nothing is written until the first mutation.
    pub fn load_with_key(backend: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut checklist = read_saved(&backend, &key);
        if checklist.is_empty() {
            tracing::info!("no saved checklist, seeding defaults");
            checklist = Checklist::with_defaults();
        }

        Self {
            checklist,
            backend: Box::new(backend),
            key,
            unsaved: false,
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        self.checklist.items()
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn find(&self, id: Uuid) -> Option<&ChecklistItem> {
        self.checklist.find(id)
    }

    pub fn len(&self) -> usize {
        self.checklist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checklist.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Flip an item between unchecked and checked
    ///
    /// Checking stamps the current time; unchecking clears it. An unknown id
    /// changes nothing and writes nothing.
    ///
    /// # Returns
    /// The new status, or `None` for an unknown id
    pub fn toggle_status(&mut self, id: Uuid) -> Result<Option<ItemStatus>> {
        let Some(status) = self.checklist.toggle_at(id, Utc::now()) else {
            tracing::debug!(%id, "toggle ignored, no such item");
            return Ok(None);
        };
        tracing::debug!(%id, %status, "toggled item");
        self.persist()?;
        Ok(Some(status))
    }

    /// Uncheck every item
    ///
    /// # Returns
    /// The number of items reset
    pub fn reset_all_items(&mut self) -> Result<usize> {
        self.checklist.reset();
        tracing::debug!(count = self.checklist.len(), "reset all items");
        self.persist()?;
        Ok(self.checklist.len())
    }

    /// Append a new unchecked item
    ///
    /// The title is stored as given; rejecting blank titles is up to the
    /// caller.
    ///
    /// # Returns
    /// The ID of the new item
    pub fn add_item(&mut self, title: impl Into<String>) -> Result<Uuid> {
        let id = self.checklist.add(title);
        tracing::debug!(%id, "added item");
        self.persist()?;
        Ok(id)
    }

    /// Remove an item; an unknown id leaves the checklist as it was
    ///
    /// # Returns
    /// `true` if an item was removed
    pub fn remove_item(&mut self, id: Uuid) -> Result<bool> {
        let removed = self.checklist.remove(id).is_some();
        tracing::debug!(%id, removed, "remove item");
        self.persist()?;
        Ok(removed)
    }

    pub fn get_stats(&self) -> ChecklistStats {
        self.checklist.stats()
    }

    /// True when the last write failed and nothing has saved since
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Retry a failed write; does nothing when everything is saved
    pub fn flush(&mut self) -> Result<()> {
        if self.unsaved {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        let result = self
            .checklist
            .to_json()
            .and_then(|json| self.backend.set(&self.key, &json));

        match result {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "checklist kept in memory but not saved");
                self.unsaved = true;
                Err(e)
            }
        }
    }
}

fn read_saved(backend: &dyn KeyValueStore, key: &str) -> Checklist {
    let json = match backend.get(key) {
        Ok(Some(json)) => json,
        Ok(None) => return Checklist::new(),
        Err(e) => {
            tracing::warn!(error = %e, key, "could not read saved checklist");
            return Checklist::new();
        }
    };

    match Checklist::from_json(&json) {
        Ok(checklist) => checklist,
        Err(e) => {
            tracing::warn!(error = %e, key, "discarding undecodable checklist");
            Checklist::new()
        }
    }
}
