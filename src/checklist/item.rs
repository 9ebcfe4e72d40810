use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check status of a checklist item
///
/// Uses lowercase variant names to match the persisted tags.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Not yet confirmed
    unchecked,
    /// Confirmed; the item carries the time it was checked
    checked,
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unchecked" => Ok(ItemStatus::unchecked),
            "checked" => Ok(ItemStatus::checked),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: unchecked, checked",
                s
            )),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::unchecked => f.write_str("unchecked"),
            ItemStatus::checked => f.write_str("checked"),
        }
    }
}

/// A single reassurance prompt on the checklist
///
/// `id` and `title` are fixed at creation. `status` and `last_checked` only
/// change together through [`ChecklistItem::check_at`], [`ChecklistItem::uncheck`]
/// and [`ChecklistItem::toggle_at`], so `last_checked` is present exactly when
/// the item is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    id: Uuid,
    title: String,
    status: ItemStatus,
    #[serde(
        rename = "lastChecked",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    last_checked: Option<DateTime<Utc>>,
}

impl ChecklistItem {
    /// Create an unchecked item with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Create an unchecked item with a known id
    pub fn with_id(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: ItemStatus::unchecked,
            last_checked: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn last_checked(&self) -> Option<DateTime<Utc>> {
        self.last_checked
    }

    pub fn is_checked(&self) -> bool {
        self.status == ItemStatus::checked
    }

    /// Mark the item checked at `now`
    pub fn check_at(&mut self, now: DateTime<Utc>) {
        self.status = ItemStatus::checked;
        self.last_checked = Some(now);
    }

    /// Mark the item unchecked and forget when it was last checked
    pub fn uncheck(&mut self) {
        self.status = ItemStatus::unchecked;
        self.last_checked = None;
    }

    /// Flip the status, stamping `now` when the item becomes checked
    ///
    /// # Returns
    /// The new status
    pub fn toggle_at(&mut self, now: DateTime<Utc>) -> ItemStatus {
        match self.status {
            ItemStatus::unchecked => self.check_at(now),
            ItemStatus::checked => self.uncheck(),
        }
        self.status
    }

    /// Repair a decoded item whose status and timestamp disagree
    ///
    /// A checked item without a timestamp cannot be trusted and falls back
    /// to unchecked. A stray timestamp on an unchecked item is dropped.
    ///
    /// # Returns
    /// `true` if the item was changed
    pub(crate) fn normalize(&mut self) -> bool {
        match (self.status, self.last_checked) {
            (ItemStatus::checked, None) | (ItemStatus::unchecked, Some(_)) => {
                self.uncheck();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_new_item_is_unchecked() {
        let item = ChecklistItem::new("Did I lock the door?");
        assert_eq!(item.title(), "Did I lock the door?");
        assert_eq!(item.status(), ItemStatus::unchecked);
        assert!(item.last_checked().is_none());
    }

    #[test]
    fn test_toggle_keeps_timestamp_in_step() {
        let mut item = ChecklistItem::new("Did I set the alarm?");

        assert_eq!(item.toggle_at(at(100)), ItemStatus::checked);
        assert_eq!(item.last_checked(), Some(at(100)));

        assert_eq!(item.toggle_at(at(200)), ItemStatus::unchecked);
        assert!(item.last_checked().is_none());

        // A re-check gets the new time, not the first one
        item.toggle_at(at(300));
        assert_eq!(item.last_checked(), Some(at(300)));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("checked".parse::<ItemStatus>(), Ok(ItemStatus::checked));
        assert_eq!(
            "unchecked".parse::<ItemStatus>(),
            Ok(ItemStatus::unchecked)
        );
        assert!("done".parse::<ItemStatus>().is_err());
        assert_eq!(ItemStatus::checked.to_string(), "checked");
    }

    #[test]
    fn test_normalize_repairs_mismatched_items() {
        let json = r#"{"id":"7b0c5e3e-6d5f-4f43-9d59-0c8f0d2b1a11","title":"x","status":"checked"}"#;
        let mut item: ChecklistItem = serde_json::from_str(json).unwrap();
        assert!(item.normalize());
        assert_eq!(item.status(), ItemStatus::unchecked);

        let mut ok = ChecklistItem::new("y");
        ok.check_at(at(5));
        assert!(!ok.normalize());
        assert_eq!(ok.status(), ItemStatus::checked);
    }
}
