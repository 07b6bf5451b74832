// ABOUTME: Dashboard statistics and per-exercise progress series over workout history
// ABOUTME: Recomputed from raw records on every call; no caching or incremental state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calories::{round_to_tenth, strength_calories, Intensity};
use crate::streaks::{day_key, StreakSummary};
use chrono::{Datelike, Duration, NaiveDate};
use liftlog_core::models::{DashboardStats, ProgressPoint, SetMetrics, WorkoutRecord};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Running totals over every set in a history
#[derive(Debug, Default)]
struct VolumeTotals {
    exercises: u64,
    sets: u64,
    volume: f64,
    calories: f64,
}

impl VolumeTotals {
    fn add_set(&mut self, metrics: SetMetrics) {
        self.sets += 1;
        match metrics {
            SetMetrics::Cardio {
                duration_minutes, ..
            } if duration_minutes > 0.0 => {
                self.calories += Intensity::Moderate.calories(duration_minutes);
            }
            SetMetrics::Strength { weight_kg, reps } if weight_kg > 0.0 && reps > 0 => {
                self.volume += weight_kg * f64::from(reps);
                self.calories += strength_calories(weight_kg, reps, 1);
            }
            SetMetrics::Cardio { .. } | SetMetrics::Strength { .. } => {}
        }
    }
}

/// Summarize the full workout history as of `today` (UTC calendar date)
///
/// Volume and calories are rounded to one decimal after summing. Week and
/// month counts are distinct workout days on or after the Monday of this week
/// and the first of this month respectively. An empty history yields all
/// zeros.
#[must_use]
pub fn compute_dashboard_stats(records: &[WorkoutRecord], today: NaiveDate) -> DashboardStats {
    let mut totals = VolumeTotals::default();
    for entry in records.iter().flat_map(|record| &record.entries) {
        totals.exercises += 1;
        for metrics in entry.set_metrics() {
            totals.add_set(metrics);
        }
    }

    let days: BTreeSet<&str> = records.iter().map(WorkoutRecord::day_key).collect();
    let streaks = StreakSummary::from_days(&days, today);

    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let month_start = today - Duration::days(i64::from(today.day0()));

    let stats = DashboardStats {
        total_workouts: records.len() as u64,
        total_exercises_logged: totals.exercises,
        total_sets: totals.sets,
        total_volume: round_to_tenth(totals.volume),
        total_calories: round_to_tenth(totals.calories),
        current_streak: streaks.current,
        longest_streak: streaks.longest,
        workouts_this_week: count_days_since(&days, &day_key(week_start)),
        workouts_this_month: count_days_since(&days, &day_key(month_start)),
    };

    debug!(
        workouts = stats.total_workouts,
        current_streak = stats.current_streak,
        longest_streak = stats.longest_streak,
        "Computed dashboard statistics"
    );

    stats
}

fn count_days_since(days: &BTreeSet<&str>, start: &str) -> u32 {
    let count = days.iter().filter(|day| **day >= start).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Per-day progress for one exercise over the last `window_days` days
///
/// Records dated on or after `today - window_days` are considered. Each day
/// with at least one entry for `exercise_id` becomes one row; days without
/// matching activity are omitted. Rows are ordered by date.
#[must_use]
pub fn compute_progress(
    records: &[WorkoutRecord],
    exercise_id: &str,
    today: NaiveDate,
    window_days: u32,
) -> Vec<ProgressPoint> {
    let window_start = day_key(today - Duration::days(i64::from(window_days)));
    let mut by_day: BTreeMap<String, ProgressPoint> = BTreeMap::new();

    for record in records
        .iter()
        .filter(|record| record.date.as_str() >= window_start.as_str())
    {
        let day = record.day_key();
        for entry in record
            .entries
            .iter()
            .filter(|entry| entry.exercise_id == exercise_id)
        {
            let point = by_day
                .entry(day.to_owned())
                .or_insert_with(|| ProgressPoint::empty(day.to_owned()));

            for set in &entry.sets {
                let weight = set.weight_kg();
                let reps = set.rep_count();
                if weight > point.max_weight {
                    point.max_weight = weight;
                }
                point.total_volume += weight * f64::from(reps);
                point.total_reps += u64::from(reps);
                point.duration += set.duration();
                point.distance += set.distance();
            }
        }
    }

    debug!(
        exercise_id,
        window_days,
        points = by_day.len(),
        "Computed exercise progress"
    );

    by_day.into_values().collect()
}
