//! Checklist domain model
//!
//! Split into submodules:
//! - `item`: a single checklist item and its status
//! - `checklist_data`: the ordered collection and its operations
//! - `serde_impl`: the persisted JSON form

mod checklist_data;
mod item;
mod serde_impl;

pub use checklist_data::{Checklist, ChecklistStats, DEFAULT_TITLES};
pub use item::{ChecklistItem, ItemStatus, local_date_today};
