//! Formatting helper functions for the checklist MCP server
//!
//! This module contains presentation logic for displaying items and stats.

use crate::checklist::{ChecklistItem, ChecklistStats, ItemStatus};
use chrono::Local;

/// Presentation metadata for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    /// SF Symbol name used by the mobile client
    pub icon: &'static str,
    /// Accent color name
    pub color: &'static str,
    /// Plain-text marker used in list output
    pub marker: &'static str,
}

const UNCHECKED_PRESENTATION: StatusPresentation = StatusPresentation {
    icon: "questionmark.circle",
    color: "gray",
    marker: "[ ]",
};

const CHECKED_PRESENTATION: StatusPresentation = StatusPresentation {
    icon: "checkmark.circle.fill",
    color: "green",
    marker: "[x]",
};

/// Look up how a status is presented
pub fn status_presentation(status: ItemStatus) -> StatusPresentation {
    match status {
        ItemStatus::unchecked => UNCHECKED_PRESENTATION,
        ItemStatus::checked => CHECKED_PRESENTATION,
    }
}

/// Format items into a display string
///
/// # Arguments
/// * `items` - Items in list order
///
/// # Returns
/// Formatted string representation of the items, with each check time in
/// local time
pub fn format_items(items: &[ChecklistItem]) -> String {
    if items.is_empty() {
        return "No items found".to_string();
    }

    let mut result = format!("Found {} item(s):\n\n", items.len());
    for item in items {
        let presentation = status_presentation(item.status());
        result.push_str(&format!(
            "- {} {} (id: {}, status: {})\n",
            presentation.marker,
            item.title(),
            item.id(),
            item.status()
        ));

        if let Some(checked_at) = item.last_checked() {
            result.push_str(&format!(
                "  Last checked: {}\n",
                checked_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
            ));
        }
    }

    result
}

/// Format stats into a display string
pub fn format_stats(stats: ChecklistStats) -> String {
    let mut result = format!(
        "Checked: {}\nUnchecked: {}\nProgress: {:.0}%",
        stats.checked,
        stats.unchecked,
        stats.progress() * 100.0
    );
    if stats.all_done() {
        result.push_str("\nAll Done!");
    }
    result
}
