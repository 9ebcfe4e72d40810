//! Add item handler for the checklist MCP server

use crate::ChecklistServerHandler;
use crate::feedback::NotificationKind;
use crate::validation;
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Validates the title, appends a new unchecked item and saves.
    pub async fn handle_add_item(&self, title: String) -> McpResult<String> {
        let title = validation::normalize_title(&title)?;

        let mut store = self.lock_store();
        let saved = store.add_item(title.clone());
        // The item is in memory even when the write failed
        let id = match &saved {
            Ok(id) => *id,
            Err(_) => store
                .items()
                .last()
                .map(|item| item.id())
                .unwrap_or_default(),
        };
        drop(store);

        self.feedback.notification(NotificationKind::success);

        let mut response = format!("Item added with ID: {} (title: {})", id, title);
        if let Err(e) = saved {
            response.push_str(&Self::persist_warning(&e));
        }
        Ok(response)
    }
}
