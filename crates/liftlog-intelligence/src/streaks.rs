// ABOUTME: Current and longest workout streaks over the distinct set of workout days
// ABOUTME: Includes the one-day grace rule that lets a streak start from yesterday
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Streak computation
//!
//! A streak is a run of consecutive calendar days that each have at least one
//! logged workout. Days are the `YYYY-MM-DD` keys of the records, so several
//! workouts on one day count once.
//!
//! The current streak is counted backward from today. If nothing was logged
//! today but something was logged yesterday, the count starts from yesterday
//! instead. That grace applies only while the streak is still zero, so it can
//! bridge the gap at today and nowhere else.

use chrono::NaiveDate;
use std::collections::BTreeSet;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Current and longest streak for a workout history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    /// Consecutive days ending today, or yesterday under the grace rule
    pub current: u32,
    /// Longest run of consecutive days; never shorter than `current`
    pub longest: u32,
}

impl StreakSummary {
    /// Compute both streaks from the distinct day keys of a history
    #[must_use]
    pub fn from_days(days: &BTreeSet<&str>, today: NaiveDate) -> Self {
        if days.is_empty() {
            return Self::default();
        }

        let descending: Vec<&str> = days.iter().rev().copied().collect();
        let ascending: Vec<&str> = days.iter().copied().collect();

        let current = current_streak(&descending, today);
        let longest = longest_streak(&ascending).max(current);

        Self { current, longest }
    }
}

/// Format a date as its `YYYY-MM-DD` day key
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` day key, `None` if it is not exactly that shape
#[must_use]
pub fn parse_day(day: &str) -> Option<NaiveDate> {
    if day.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(day, DAY_FORMAT).ok()
}

/// Grace rule for the start of the current-streak walk
///
/// Returns the day the walk should resume from when `day` is yesterday and no
/// streak has been counted yet; `None` otherwise.
#[must_use]
pub fn grace_day_start(day: &str, today: NaiveDate, streak_so_far: u32) -> Option<NaiveDate> {
    if streak_so_far != 0 {
        return None;
    }
    let yesterday = today.pred_opt()?;
    (day == day_key(yesterday)).then_some(yesterday)
}

/// Count consecutive days walking backward from `today`
///
/// `days_desc` must be distinct day keys sorted newest first. The walk stops at
/// the first key that is neither the expected day nor eligible for the grace
/// rule, which includes any key dated after today.
#[must_use]
pub fn current_streak(days_desc: &[&str], today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;

    for &day in days_desc {
        let matched = if day == day_key(cursor) {
            cursor
        } else if let Some(start) = grace_day_start(day, today, streak) {
            start
        } else {
            break;
        };

        streak += 1;
        match matched.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    streak
}

/// Longest run of consecutive days
///
/// `days_asc` must be distinct day keys sorted oldest first. Keys that do not
/// parse as dates are skipped without breaking the run around them.
#[must_use]
pub fn longest_streak(days_asc: &[&str]) -> u32 {
    let mut longest = 0;
    let mut running = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in days_asc.iter().filter_map(|day| parse_day(day)) {
        running = match previous {
            Some(prev) if prev.succ_opt() == Some(date) => running + 1,
            Some(_) => {
                longest = longest.max(running);
                1
            }
            None => 1,
        };
        previous = Some(date);
    }

    longest.max(running)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
    }

    fn days_ago(n: i64) -> String {
        day_key(today() - Duration::days(n))
    }

    fn summary(offsets: &[i64]) -> StreakSummary {
        let keys: Vec<String> = offsets.iter().map(|n| days_ago(*n)).collect();
        let set: BTreeSet<&str> = keys.iter().map(String::as_str).collect();
        StreakSummary::from_days(&set, today())
    }

    #[test]
    fn test_streak_including_today() {
        let streaks = summary(&[0, 1, 2]);
        assert_eq!(streaks.current, 3);
        assert_eq!(streaks.longest, 3);
    }

    #[test]
    fn test_grace_day_when_today_missing() {
        assert_eq!(summary(&[1, 2]).current, 2);
    }

    #[test]
    fn test_gap_too_large_for_grace() {
        let streaks = summary(&[5]);
        assert_eq!(streaks.current, 0);
        assert_eq!(streaks.longest, 1);
    }

    #[test]
    fn test_grace_does_not_bridge_later_gaps() {
        // today, yesterday, then a gap at day 2
        assert_eq!(summary(&[0, 1, 3, 4]).current, 2);
        // grace used at the start, then a gap at day 3
        assert_eq!(summary(&[1, 2, 4]).current, 2);
    }

    #[test]
    fn test_grace_day_start_only_at_zero() {
        let yesterday = days_ago(1);
        assert_eq!(
            grace_day_start(&yesterday, today(), 0),
            Some(today() - Duration::days(1))
        );
        assert_eq!(grace_day_start(&yesterday, today(), 1), None);
        assert_eq!(grace_day_start(&days_ago(2), today(), 0), None);
        assert_eq!(grace_day_start(&days_ago(0), today(), 0), None);
    }

    #[test]
    fn test_future_day_stops_current_walk() {
        let tomorrow = day_key(today() + Duration::days(1));
        let keys = [tomorrow, days_ago(0), days_ago(1)];
        let set: BTreeSet<&str> = keys.iter().map(String::as_str).collect();

        let streaks = StreakSummary::from_days(&set, today());
        assert_eq!(streaks.current, 0);
        assert_eq!(streaks.longest, 3);
    }

    #[test]
    fn test_longest_streak_in_history() {
        let streaks = summary(&[0, 10, 11, 12, 13, 20, 21]);
        assert_eq!(streaks.current, 1);
        assert_eq!(streaks.longest, 4);
    }

    #[test]
    fn test_longest_never_below_current() {
        let cases: [&[i64]; 4] = [&[0, 1, 2, 3], &[1, 2], &[0, 2, 3, 4, 5], &[]];
        for offsets in cases {
            let streaks = summary(offsets);
            assert!(streaks.longest >= streaks.current);
        }
    }

    #[test]
    fn test_malformed_days_are_skipped() {
        let days = ["2025-06-01", "2025-06-02", "2025-06-0x", "2025-06-03", "garbage"];
        let mut sorted = days.to_vec();
        sorted.sort_unstable();
        assert_eq!(longest_streak(&sorted), 3);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(summary(&[]), StreakSummary::default());
        assert_eq!(current_streak(&[], today()), 0);
        assert_eq!(longest_streak(&[]), 0);
    }

    #[test]
    fn test_parse_day_requires_full_iso_shape() {
        assert!(parse_day("2025-06-18").is_some());
        assert!(parse_day("2025-6-18").is_none());
        assert!(parse_day("2025-02-30").is_none());
    }
}
