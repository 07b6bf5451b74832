// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Calorie model coefficients, query limits, and network defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Calorie estimation model
pub mod calories {
    /// Approximate metabolic cost per kg-rep of strength work
    pub const STRENGTH_KCAL_PER_KG_REP: f64 = 0.05;
    /// Multiplier covering rest and recovery between sets
    pub const STRENGTH_RECOVERY_MULTIPLIER: f64 = 1.3;
    /// Assumed body mass in kilograms (no per-user weight is modeled)
    pub const REFERENCE_BODY_MASS_KG: f64 = 70.0;
    /// MET for light cardio (walking)
    pub const MET_LIGHT: f64 = 3.5;
    /// MET for moderate cardio (jogging)
    pub const MET_MODERATE: f64 = 7.0;
    /// MET for vigorous cardio (running, HIIT)
    pub const MET_VIGOROUS: f64 = 10.0;
}

/// Query and aggregation limits
pub mod limits {
    /// Upper bound on records read for a single aggregation pass
    pub const MAX_AGGREGATION_RECORDS: u32 = 10_000;
    /// Default progress lookback window in days
    pub const DEFAULT_PROGRESS_DAYS: u32 = 30;
    /// Maximum progress lookback window in days
    pub const MAX_PROGRESS_DAYS: u32 = 365;
    /// Default page size for workout listing
    pub const DEFAULT_WORKOUT_LIST_LIMIT: u32 = 50;
    /// Maximum page size for workout listing
    pub const MAX_WORKOUT_LIST_LIMIT: u32 = 100;
    /// Number of workouts shown on the dashboard
    pub const RECENT_WORKOUTS_LIMIT: u32 = 5;
    /// Maximum exercises returned by a catalog query
    pub const MAX_EXERCISE_LIST_LIMIT: u32 = 500;
    /// Maximum templates returned by a listing
    pub const MAX_TEMPLATE_LIST_LIMIT: u32 = 100;
    /// Default number of sets suggested by a template exercise
    pub const DEFAULT_TEMPLATE_SETS: u32 = 3;
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Server binary / service name
    pub const LIFTLOG_SERVER: &str = "liftlog-server";
}

/// API endpoints
pub mod endpoints {
    /// API base path
    pub const API_BASE: &str = "/api";
}
