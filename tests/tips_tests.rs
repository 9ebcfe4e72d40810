//! Daily tip selection tests

use chrono::{Duration, NaiveDate};
use paranoia_mcp::tips::{CBT_TIPS, tip_for, tip_index, today_tip, today_tip_index};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn test_epoch_is_index_zero() {
    assert_eq!(tip_index(epoch()), 0);
    assert_eq!(
        tip_for(epoch()),
        "This is a false alarm from my brain. I don't need to act on it."
    );
}

#[test]
fn test_cycle_repeats_every_30_days() {
    assert_eq!(CBT_TIPS.len(), 30);
    assert_eq!(tip_index(epoch() + Duration::days(30)), tip_index(epoch()));
    assert_eq!(tip_index(epoch() + Duration::days(29)), 29);
    assert_eq!(tip_index(epoch() + Duration::days(61)), 1);
}

#[test]
fn test_consecutive_days_are_consecutive_indices() {
    let start = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
    for offset in 0..90 {
        let day = start + Duration::days(offset);
        let next = day + Duration::days(1);
        assert_eq!(tip_index(next), (tip_index(day) + 1) % CBT_TIPS.len());
    }
}

#[test]
fn test_no_repeats_within_a_cycle() {
    let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let mut seen: Vec<usize> = (0..30)
        .map(|offset| tip_index(start + Duration::days(offset)))
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..30).collect::<Vec<_>>());
}

#[test]
fn test_known_dates() {
    // 69 days after the epoch, across the leap day
    assert_eq!(tip_index(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()), 9);
    // 1022 days after the epoch
    assert_eq!(tip_index(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()), 2);
}

#[test]
fn test_today_is_stable() {
    let index = today_tip_index();
    assert!(index < CBT_TIPS.len());
    assert_eq!(today_tip(), CBT_TIPS[today_tip_index()]);
}
