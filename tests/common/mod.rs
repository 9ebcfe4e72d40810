//! Common test utilities for integration tests
#![allow(dead_code)]

use anyhow::{Result, bail};
use paranoia_mcp::feedback::{Feedback, ImpactStyle, NotificationKind};
use paranoia_mcp::{ChecklistServerHandler, ItemStore, KeyValueStore, MemoryKeyValueStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A feedback cue seen by [`RecordingFeedback`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Impact(ImpactStyle),
    Notification(NotificationKind),
}

/// Feedback stub that remembers every cue
#[derive(Default)]
pub struct RecordingFeedback {
    cues: Mutex<Vec<Cue>>,
}

impl RecordingFeedback {
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().unwrap().clone()
    }
}

impl Feedback for RecordingFeedback {
    fn impact(&self, style: ImpactStyle) {
        self.cues.lock().unwrap().push(Cue::Impact(style));
    }

    fn notification(&self, kind: NotificationKind) {
        self.cues.lock().unwrap().push(Cue::Notification(kind));
    }
}

/// Memory store whose writes can be switched to fail
#[derive(Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryKeyValueStore,
    pub failing: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("disk full");
        }
        self.inner.set(key, value)
    }
}

/// Handler over an in-memory store, with a handle on its slots and feedback
pub fn get_memory_handler() -> (
    ChecklistServerHandler,
    MemoryKeyValueStore,
    Arc<RecordingFeedback>,
) {
    let slots = MemoryKeyValueStore::new();
    let feedback = Arc::new(RecordingFeedback::default());
    let handler =
        ChecklistServerHandler::from_parts(ItemStore::load(slots.clone()), feedback.clone());
    (handler, slots, feedback)
}

/// Extract the item ID from an add_item() response message
/// Response format: "Item added with ID: <id> (title: ...)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    String::new()
}
