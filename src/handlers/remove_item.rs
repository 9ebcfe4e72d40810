//! Remove item handler for the checklist MCP server

use crate::ChecklistServerHandler;
use crate::feedback::ImpactStyle;
use crate::validation;
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Removes one item by ID. Unknown IDs leave the checklist unchanged.
    pub async fn handle_remove_item(&self, id: String) -> McpResult<String> {
        let id = validation::parse_item_id(&id)?;

        let mut store = self.lock_store();
        let title = store.find(id).map(|item| item.title().to_string());
        let saved = store.remove_item(id);
        drop(store);

        let mut response = match title {
            Some(title) => {
                self.feedback.impact(ImpactStyle::medium);
                format!("Removed '{}' ({})", title, id)
            }
            None => format!("No item with ID {}; nothing changed", id),
        };
        if let Err(e) = saved {
            response.push_str(&Self::persist_warning(&e));
        }
        Ok(response)
    }
}
