// ABOUTME: Criterion benchmarks for the statistics and progress aggregation engine
// ABOUTME: Measures dashboard and progress computation over synthetic workout histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the aggregation engine.
//!
//! Histories are generated with one or two workouts per day going back from a
//! fixed date, mixing strength and cardio entries.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{DateTime, Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftlog_server::intelligence::{compute_dashboard_stats, compute_progress, streaks::day_key};
use liftlog_server::models::{ExerciseCategory, SetRecord, WorkoutEntry, WorkoutRecord};

const HISTORY_SIZES: [usize; 3] = [100, 1_000, 10_000];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
}

fn generate_history(count: usize) -> Vec<WorkoutRecord> {
    let created_at = DateTime::<Utc>::from_timestamp(1_750_000_000, 0).unwrap();

    (0..count)
        .map(|i| {
            // Skip every seventh day so streaks break regularly
            let offset = (i / 2 + i / 14) as i64;
            let date = day_key(today() - Duration::days(offset));
            let weight = 40.0 + (i % 50) as f64;

            let strength = WorkoutEntry {
                exercise_id: format!("lift-{}", i % 5),
                exercise_name: "Bench Press".to_owned(),
                category: ExerciseCategory::Strength,
                sets: (1..=4)
                    .map(|n| SetRecord {
                        set_number: n,
                        reps: Some(8),
                        weight: Some(weight),
                        ..SetRecord::default()
                    })
                    .collect(),
            };
            let cardio = WorkoutEntry {
                exercise_id: "run".to_owned(),
                exercise_name: "Running".to_owned(),
                category: ExerciseCategory::Cardio,
                sets: vec![SetRecord {
                    set_number: 1,
                    duration_minutes: Some(20.0 + (i % 10) as f64),
                    distance_km: Some(4.0),
                    ..SetRecord::default()
                }],
            };

            WorkoutRecord {
                id: format!("workout-{i}"),
                date,
                entries: vec![strength, cardio],
                notes: None,
                created_at,
            }
        })
        .collect()
}

fn bench_dashboard_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_stats");

    for count in HISTORY_SIZES {
        let history = generate_history(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_dashboard_stats", count),
            &history,
            |b, history| b.iter(|| compute_dashboard_stats(black_box(history), today())),
        );
    }

    group.finish();
}

fn bench_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress");

    for count in HISTORY_SIZES {
        let history = generate_history(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_progress_365d", count),
            &history,
            |b, history| b.iter(|| compute_progress(black_box(history), "lift-0", today(), 365)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dashboard_stats, bench_progress);
criterion_main!(benches);
