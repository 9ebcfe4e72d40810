//! Share and daily tip handlers for the checklist MCP server

use crate::ChecklistServerHandler;
use crate::share;
use crate::tips;
use crate::validation::{self, ShareKind};
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Builds the requested share text from the current checklist or today's tip.
    pub async fn handle_share(&self, kind: Option<String>) -> McpResult<String> {
        let kind = validation::parse_share_kind(kind.as_deref())?;

        let text = match kind {
            ShareKind::Text => share::share_text(self.lock_store().items()),
            ShareKind::Card => share::share_card_text(self.lock_store().items()),
            ShareKind::Tip => share::tip_share_text(tips::today_tip()),
        };
        Ok(text)
    }

    /// Returns today's tip with its place in the 30-day cycle.
    pub async fn handle_daily_tip(&self) -> McpResult<String> {
        let index = tips::today_tip_index();
        Ok(format!(
            "Today's CBT Tip ({}/{}):\n{}",
            index + 1,
            tips::CBT_TIPS.len(),
            tips::CBT_TIPS[index]
        ))
    }
}
