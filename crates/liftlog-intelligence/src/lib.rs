// ABOUTME: Workout aggregation engine: calorie estimates, streaks, and progress series
// ABOUTME: Pure functions over (records, today) with no storage or clock access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Intelligence
//!
//! Derives dashboard statistics and per-exercise progress from raw workout
//! history. Every entry point takes the records and the current UTC calendar
//! date explicitly, so results are deterministic and the engine never touches
//! the store or the system clock.
//!
//! Aggregation never fails: absent numeric fields count as zero and malformed
//! dates are skipped.

/// Calorie estimation for strength and cardio sets
pub mod calories;

/// Current and longest streak computation over workout dates
pub mod streaks;

/// Dashboard statistics and per-exercise progress series
pub mod aggregation;

pub use aggregation::{compute_dashboard_stats, compute_progress};
pub use calories::{cardio_calories, strength_calories, Intensity};
pub use streaks::{current_streak, grace_day_start, longest_streak, StreakSummary};
