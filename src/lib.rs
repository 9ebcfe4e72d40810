//! ParanoiaList MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a
//! reassurance checklist: short prompts such as "Did I lock the door?" that
//! are checked off once confirmed, plus a daily CBT tip.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `ChecklistServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `checklist`, `store`, `tips`, `share` - Items, the item store and pure helpers
//! - **Persistence Layer**: `storage` module - Key-value slots in a local TOML file
//!
//! # Example
//!
//! ```no_run
//! use paranoia_mcp::ChecklistServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = ChecklistServerHandler::new("paranoia.toml")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod checklist;
pub mod feedback;
pub mod formatting;
mod handlers;
pub mod logging;
pub mod share;
pub mod storage;
pub mod store;
pub mod tips;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use checklist::{Checklist, ChecklistItem, ChecklistStats, ItemStatus};
pub use feedback::{Feedback, TracingFeedback};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use store::{DEFAULT_STORAGE_KEY, ItemStore};

/// MCP Server handler for the reassurance checklist
///
/// Owns the item store behind a mutex so every tool call reads and writes
/// the checklist one at a time. Every change is saved to the store's
/// key-value slot as part of the same call.
pub struct ChecklistServerHandler {
    pub(crate) store: Mutex<ItemStore>,
    pub(crate) feedback: Arc<dyn Feedback>,
}

impl ChecklistServerHandler {
    /// Create a new handler backed by a store file, using the default slot
    ///
    /// # Arguments
    /// * `storage_path` - Path to the key-value store file (TOML format)
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use paranoia_mcp::ChecklistServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = ChecklistServerHandler::new("paranoia.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str) -> Result<Self> {
        Self::with_storage_key(storage_path, DEFAULT_STORAGE_KEY)
    }

    /// Create a new handler backed by a store file and a named slot
    ///
    /// The parent directory of the file is created if it does not exist.
    /// Loading never fails; unreadable data falls back to the default items.
    pub fn with_storage_key(storage_path: &str, key: &str) -> Result<Self> {
        if let Some(parent) = Path::new(storage_path).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let store = ItemStore::load_with_key(FileKeyValueStore::new(storage_path), key);
        Ok(Self::from_parts(store, Arc::new(TracingFeedback)))
    }

    /// Create a handler from an already loaded store and a feedback sink
    pub fn from_parts(store: ItemStore, feedback: Arc<dyn Feedback>) -> Self {
        Self {
            store: Mutex::new(store),
            feedback,
        }
    }

    /// Lock the item store
    ///
    /// Every store operation leaves the checklist consistent, so a lock
    /// poisoned by a panicking caller is still safe to use.
    pub(crate) fn lock_store(&self) -> MutexGuard<'_, ItemStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current checklist
    pub fn snapshot(&self) -> Checklist {
        self.lock_store().checklist().clone()
    }

    /// Response line for a change that is in memory but could not be written
    pub(crate) fn persist_warning(error: &anyhow::Error) -> String {
        format!(
            "\nWarning: the change is kept in memory but could not be saved ({:#}). It will be saved with the next change.",
            error
        )
    }
}

impl Drop for ChecklistServerHandler {
    fn drop(&mut self) {
        // Retry a failed write on shutdown
        if let Err(e) = self.lock_store().flush() {
            tracing::warn!(error = %e, "unsaved checklist changes lost on shutdown");
        }
    }
}

/// ParanoiaList: a reassurance checklist for intrusive "did I...?" doubts.
///
/// Each item is a short prompt ("Did I lock the door?") that is either unchecked
/// or checked. Checking an item records the time it was confirmed, so the doubt
/// can be answered by looking instead of checking again.
///
/// Key concepts:
/// - **unchecked**: not confirmed yet
/// - **checked**: confirmed, with the time of confirmation
/// - **reset**: uncheck everything to start a new round (e.g., before leaving home)
/// - **daily tip**: one CBT tip per calendar day, cycling through 30 tips
///
/// Item IDs are UUIDs shown by `list` and returned by `add_item`.
#[mcp_server]
impl McpServer for ChecklistServerHandler {
    /// **Review**: List all items in order with their status and last check time.
    /// **Workflow**: Start here to get item IDs for toggle_status/remove_item.
    #[tool]
    async fn list(&self) -> McpResult<String> {
        self.handle_list().await
    }

    /// **Check/Uncheck**: Flip one item. Checking records the current time; unchecking clears it.
    /// **Note**: An unknown ID changes nothing.
    #[tool]
    async fn toggle_status(
        &self,
        /// ID of the item (UUID from list)
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_status(id).await
    }

    /// **Add**: Append a new unchecked prompt to the end of the list.
    #[tool]
    async fn add_item(
        &self,
        /// Title: the prompt to track (e.g., "Did I feed the cat?"), must not be blank
        title: String,
    ) -> McpResult<String> {
        self.handle_add_item(title).await
    }

    /// **Remove**: Delete one item permanently.
    /// **Note**: An unknown ID changes nothing.
    #[tool]
    async fn remove_item(
        &self,
        /// ID of the item (UUID from list)
        id: String,
    ) -> McpResult<String> {
        self.handle_remove_item(id).await
    }

    /// **Reset**: Uncheck every item to start a fresh round of checks.
    #[tool]
    async fn reset_all(&self) -> McpResult<String> {
        self.handle_reset_all().await
    }

    /// **Progress**: Count checked and unchecked items.
    #[tool]
    async fn stats(&self) -> McpResult<String> {
        self.handle_stats().await
    }

    /// **Daily Tip**: Today's CBT tip. The same calendar day always gives the same tip.
    #[tool]
    async fn daily_tip(&self) -> McpResult<String> {
        self.handle_daily_tip().await
    }

    /// **Share**: Text to share with someone.
    /// **Kinds**: "text" = remaining unchecked items (default), "card" = whole checklist, "tip" = today's tip card.
    #[tool]
    async fn share(
        &self,
        /// Kind: text/card/tip (optional, default text)
        kind: Option<String>,
    ) -> McpResult<String> {
        self.handle_share(kind).await
    }
}
