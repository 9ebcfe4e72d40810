//! Validation helper functions for the checklist MCP server
//!
//! Tool parameters are checked here before they reach the store. The store
//! trusts its callers, so blank titles must be rejected at this layer.

use mcp_attr::Result as McpResult;
use uuid::Uuid;

/// What a share request produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    /// Reminder list of unchecked items
    Text,
    /// Text rendition of the checklist card
    Card,
    /// Today's tip card
    Tip,
}

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Trim a title and reject it if nothing is left
///
/// # Arguments
/// * `raw` - Title as typed by the user
///
/// # Returns
/// The trimmed title or an invalid-params error
pub fn normalize_title(raw: &str) -> McpResult<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(invalid_params(
            "Title must not be blank. Describe what you want to track (e.g., 'Did I feed the cat?')"
                .to_string(),
        ));
    }
    Ok(title.to_string())
}

/// Parse an item ID
///
/// # Arguments
/// * `raw` - ID as returned by `list` or `add_item`
///
/// # Returns
/// The parsed ID or an invalid-params error
pub fn parse_item_id(raw: &str) -> McpResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        invalid_params(format!(
            "Invalid item ID '{}'. Use an ID shown by list (e.g., '67e55044-10b1-426f-9247-bb680e5fe0c8')",
            raw
        ))
    })
}

/// Parse the share kind parameter; absent or empty means text
pub fn parse_share_kind(raw: Option<&str>) -> McpResult<ShareKind> {
    match raw.map(str::trim) {
        None | Some("") | Some("text") => Ok(ShareKind::Text),
        Some("card") => Ok(ShareKind::Card),
        Some("tip") => Ok(ShareKind::Tip),
        Some(other) => Err(invalid_params(format!(
            "Invalid share kind '{}'. Valid kinds: text, card, tip",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(
            normalize_title("  Did I feed the cat?  ").unwrap(),
            "Did I feed the cat?"
        );
        assert!(normalize_title("").is_err());
        assert!(normalize_title(" \t ").is_err());
    }

    #[test]
    fn test_parse_item_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_item_id(&format!(" {} ", id)).unwrap(), id);
        assert!(parse_item_id("task-1").is_err());
    }

    #[test]
    fn test_parse_share_kind() {
        assert_eq!(parse_share_kind(None).unwrap(), ShareKind::Text);
        assert_eq!(parse_share_kind(Some("")).unwrap(), ShareKind::Text);
        assert_eq!(parse_share_kind(Some("card")).unwrap(), ShareKind::Card);
        assert_eq!(parse_share_kind(Some(" tip ")).unwrap(), ShareKind::Tip);
        assert!(parse_share_kind(Some("image")).is_err());
    }
}
