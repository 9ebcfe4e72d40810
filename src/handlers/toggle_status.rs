//! Toggle status handler for the checklist MCP server

use crate::ChecklistServerHandler;
use crate::checklist::ItemStatus;
use crate::feedback::ImpactStyle;
use crate::validation;
use chrono::Local;
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Flips one item between unchecked and checked. Unknown IDs change nothing.
    pub async fn handle_toggle_status(&self, id: String) -> McpResult<String> {
        let id = validation::parse_item_id(&id)?;

        let mut store = self.lock_store();
        let saved = store.toggle_status(id);
        let Some(item) = store.find(id).cloned() else {
            drop(store);
            return Ok(format!("No item with ID {}; nothing changed", id));
        };
        drop(store);

        self.feedback.impact(ImpactStyle::light);

        let mut response = match (item.status(), item.last_checked()) {
            (ItemStatus::checked, Some(at)) => format!(
                "'{}' is now checked (at {})",
                item.title(),
                at.with_timezone(&Local).format("%H:%M")
            ),
            _ => format!("'{}' is now unchecked", item.title()),
        };
        if let Err(e) = saved {
            response.push_str(&Self::persist_warning(&e));
        }
        Ok(response)
    }
}
