//! Serialization and deserialization implementations for Checklist
//!
//! The checklist is persisted as a bare JSON array of items. Decoding
//! normalizes what it reads so the status/timestamp invariant holds and ids
//! stay unique, whatever the saved data looked like.

use super::checklist_data::Checklist;
use super::item::ChecklistItem;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Checklist {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Checklist {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<ChecklistItem>::deserialize(deserializer)?;
        let decoded = raw.len();

        let mut checklist = Checklist::new();
        let mut repaired = 0;
        for mut item in raw {
            if item.normalize() {
                repaired += 1;
            }
            // Later duplicates of an id are dropped
            checklist.push(item);
        }

        let dropped = decoded - checklist.len();
        if repaired > 0 || dropped > 0 {
            tracing::debug!(repaired, dropped, "normalized saved checklist");
        }

        Ok(checklist)
    }
}

impl Checklist {
    /// Encode the whole checklist for a storage slot
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to encode checklist")
    }

    /// Decode a checklist from a storage slot value
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to decode checklist")
    }
}
