// ABOUTME: Intelligence module re-exports from the liftlog-intelligence crate
// ABOUTME: Preserves crate::intelligence import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Dashboard statistics, streaks, calorie estimates, and progress series.

pub use liftlog_intelligence::*;

pub use liftlog_intelligence::{aggregation, calories, streaks};
