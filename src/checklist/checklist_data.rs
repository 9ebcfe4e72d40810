use crate::checklist::item::{ChecklistItem, ItemStatus};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Titles seeded on first run, in display order
pub const DEFAULT_TITLES: [&str; 8] = [
    "Did I lock the door?",
    "Did I turn off the stove?",
    "Did I lock the car?",
    "Did I unplug the charger?",
    "Did I close the windows?",
    "Do I have my keys?",
    "Did I set the alarm?",
    "Did I close the garage door?",
];

/// Checked/unchecked counts for a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChecklistStats {
    pub checked: usize,
    pub unchecked: usize,
}

impl ChecklistStats {
    pub fn total(&self) -> usize {
        self.checked + self.unchecked
    }

    /// Fraction of items checked, 0.0 for an empty list
    pub fn progress(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.checked as f64 / self.total() as f64
        }
    }

    /// Nothing is left unchecked
    pub fn all_done(&self) -> bool {
        self.unchecked == 0
    }
}

/// Ordered collection of checklist items
///
/// Items keep insertion order, which is also display and share order.
/// Ids are unique; titles may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Checklist {
    pub(crate) items: Vec<ChecklistItem>,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl Checklist {
    /// Create an empty checklist
    pub fn new() -> Self {
        Self::default()
    }

    /// The first-run checklist: every default title, unchecked
    pub fn with_defaults() -> Self {
        Self {
            items: DEFAULT_TITLES.iter().map(|t| ChecklistItem::new(*t)).collect(),
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by its ID
    pub fn find(&self, id: Uuid) -> Option<&ChecklistItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|i| i.id() == id)
    }

    /// Append a new unchecked item
    ///
    /// # Returns
    /// The ID of the new item
    pub fn add(&mut self, title: impl Into<String>) -> Uuid {
        let item = ChecklistItem::new(title);
        let id = item.id();
        self.items.push(item);
        id
    }

    /// Append an existing item, ignoring it if its ID is already present
    ///
    /// # Returns
    /// `true` if the item was appended
    pub fn push(&mut self, item: ChecklistItem) -> bool {
        if self.find(item.id()).is_some() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item with the given ID
    ///
    /// # Returns
    /// The removed item if found
    pub fn remove(&mut self, id: Uuid) -> Option<ChecklistItem> {
        let pos = self.items.iter().position(|i| i.id() == id)?;
        Some(self.items.remove(pos))
    }

    /// Flip the status of the item with the given ID
    ///
    /// # Returns
    /// The new status, or `None` if no item has that ID
    pub fn toggle_at(&mut self, id: Uuid, now: DateTime<Utc>) -> Option<ItemStatus> {
        self.find_mut(id).map(|item| item.toggle_at(now))
    }

    /// Uncheck every item
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.uncheck();
        }
    }

    pub fn stats(&self) -> ChecklistStats {
        let checked = self.items.iter().filter(|i| i.is_checked()).count();
        ChecklistStats {
            checked,
            unchecked: self.items.len() - checked,
        }
    }
}
