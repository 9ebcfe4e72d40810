//! Reset handler for the checklist MCP server

use crate::ChecklistServerHandler;
use crate::feedback::ImpactStyle;
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Unchecks every item so the list can be gone through again.
    pub async fn handle_reset_all(&self) -> McpResult<String> {
        let mut store = self.lock_store();
        let saved = store.reset_all_items();
        let count = store.len();
        drop(store);

        self.feedback.impact(ImpactStyle::medium);

        let mut response = format!("Reset {} item(s) to unchecked", count);
        if let Err(e) = saved {
            response.push_str(&Self::persist_warning(&e));
        }
        Ok(response)
    }
}
