//! Plain-text share content
//!
//! These are the strings handed to a share target: the reminder list, a
//! text rendition of the checklist card, and the tip card.

use crate::checklist::ChecklistItem;

pub const COMPLETION_MESSAGE: &str =
    "All done! Everything on my ParanoiaList is checked. I can let it go.";
pub const SHARE_HEADER: &str = "Still on my ParanoiaList:";
pub const CARD_TITLE: &str = "My Checklist";
pub const CARD_FOOTER: &str = "Shared from ParanoiaList";
pub const TIP_CARD_TITLE: &str = "Everyday Tip";
pub const TIP_CARD_FOOTER: &str = "From ParanoiaList";

/// Share text for the checklist
///
/// When everything is checked (an empty list counts) this is the completion
/// message. Otherwise it is the header followed by one bullet per unchecked
/// title, in list order.
pub fn share_text(items: &[ChecklistItem]) -> String {
    let unchecked: Vec<&ChecklistItem> = items.iter().filter(|i| !i.is_checked()).collect();
    if unchecked.is_empty() {
        return COMPLETION_MESSAGE.to_string();
    }

    let mut text = SHARE_HEADER.to_string();
    for item in unchecked {
        text.push_str("\n• ");
        text.push_str(item.title());
    }
    text
}

/// Text rendition of the checklist share card
pub fn share_card_text(items: &[ChecklistItem]) -> String {
    let mut text = format!("{}\n\n", CARD_TITLE);
    for item in items {
        let mark = if item.is_checked() { '✓' } else { '○' };
        text.push_str(&format!("{} {}\n", mark, item.title()));
    }
    text.push('\n');
    text.push_str(CARD_FOOTER);
    text
}

/// Text rendition of the daily tip share card
pub fn tip_share_text(tip: &str) -> String {
    format!("{}\n\n{}\n\n{}", TIP_CARD_TITLE, tip, TIP_CARD_FOOTER)
}
