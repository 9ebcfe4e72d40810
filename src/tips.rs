//! Daily CBT tip selection
//!
//! Each calendar day maps to one tip. Days are counted from 2024-01-01 on
//! the local calendar and wrap around the table, so the whole table is seen
//! once every 30 days with no repeats inside a cycle.

use crate::checklist::local_date_today;
use chrono::{Datelike, NaiveDate};

pub const CBT_TIPS: [&str; 30] = [
    "This is a false alarm from my brain. I don't need to act on it.",
    "Feeling unsure doesn't mean something's wrong.",
    "I've checked already — checking again won't make me feel better.",
    "It's okay to feel uncomfortable. I can sit with it.",
    "I've had this thought before — and everything turned out fine.",
    "The goal is to tolerate doubt, not eliminate it.",
    "Doing nothing right now is actually progress.",
    "Resisting the urge is how I retrain my brain.",
    "It's just a thought, not a fact.",
    "My safety doesn't depend on checking again.",
    "I can feel anxious and still make the right choice.",
    "If I delay checking, the urge will pass.",
    "Discomfort won't hurt me — it just feels intense.",
    "I'm learning to trust my past actions.",
    "Repeating the same action won't bring new certainty.",
    "This fear has no evidence — only imagination.",
    "One time of trusting myself is better than 10 checks.",
    "What if is not a reason to act.",
    "My memory is not perfect, and that's okay.",
    "The more I check, the more anxious I stay.",
    "I've done my part. Now I let go.",
    "Just because I can think it doesn't mean it's true.",
    "Relief from checking is temporary — I want long-term peace.",
    "I'm building resilience, not chasing certainty.",
    "My brain wants safety. But safety is already here.",
    "This worry doesn't define me.",
    "Each time I resist, I gain strength.",
    "I accept doubt. I don't need to solve it.",
    "I've locked the door. That's a fact. The rest is noise.",
    "I choose calm over control.",
];

/// 2024-01-01 as days since 0001-01-01 (which is day 1)
const TIP_EPOCH_DAYS_FROM_CE: i32 = 738_886;

/// Index into [`CBT_TIPS`] for a calendar day
///
/// Days before the epoch wrap around as well, so the result is always a
/// valid index.
pub fn tip_index(date: NaiveDate) -> usize {
    let days = date.num_days_from_ce() - TIP_EPOCH_DAYS_FROM_CE;
    days.rem_euclid(CBT_TIPS.len() as i32) as usize
}

pub fn tip_for(date: NaiveDate) -> &'static str {
    CBT_TIPS[tip_index(date)]
}

/// Index of today's tip on the local calendar
pub fn today_tip_index() -> usize {
    tip_index(local_date_today())
}

pub fn today_tip() -> &'static str {
    tip_for(local_date_today())
}
