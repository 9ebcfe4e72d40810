//! List and stats handlers for the checklist MCP server

use crate::ChecklistServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Formats every item in list order.
    pub async fn handle_list(&self) -> McpResult<String> {
        let store = self.lock_store();
        let items = store.items().to_vec();
        drop(store);

        Ok(formatting::format_items(&items))
    }

    /// Formats checked/unchecked counts and progress.
    pub async fn handle_stats(&self) -> McpResult<String> {
        let stats = self.lock_store().get_stats();
        Ok(formatting::format_stats(stats))
    }
}
