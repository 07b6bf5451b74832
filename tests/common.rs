// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, server resources, routers, and workout builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `liftlog_server`

use anyhow::Result;
use axum::Router;
use chrono::{Duration, NaiveDate, Utc};
use liftlog_server::{
    config::environment::{DatabaseConfig, DatabaseUrl, ServerConfig},
    database::Database,
    intelligence::streaks::day_key,
    models::{ExerciseCategory, SetRecord, WorkoutEntry},
    resources::ServerResources,
    server::LiftLogServer,
};
use serde_json::{json, Value};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary helper may already have installed one
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Configuration pointing at a fresh in-memory database
pub fn test_config(seed_exercises: bool) -> ServerConfig {
    ServerConfig {
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            seed_exercises,
        },
        ..ServerConfig::default()
    }
}

/// Server resources over an in-memory database
pub async fn create_test_resources(seed_exercises: bool) -> Result<Arc<ServerResources>> {
    init_test_logging();
    Ok(LiftLogServer::bootstrap(test_config(seed_exercises)).await?)
}

/// The full application router, middleware included
pub async fn create_test_router(seed_exercises: bool) -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_resources(seed_exercises).await?;
    let router = LiftLogServer::new(Arc::clone(&resources)).router();
    Ok((router, resources))
}

/// Today's UTC calendar date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `YYYY-MM-DD` key for `n` days before today
pub fn days_ago(n: i64) -> String {
    day_key(today() - Duration::days(n))
}

/// A strength set
pub fn strength_set(set_number: u32, weight: f64, reps: u32) -> SetRecord {
    SetRecord {
        set_number,
        reps: Some(reps),
        weight: Some(weight),
        ..SetRecord::default()
    }
}

/// A cardio set
pub fn cardio_set(set_number: u32, duration_minutes: f64, distance_km: f64) -> SetRecord {
    SetRecord {
        set_number,
        duration_minutes: Some(duration_minutes),
        distance_km: Some(distance_km),
        ..SetRecord::default()
    }
}

/// One exercise entry with its sets
pub fn entry(
    exercise_id: &str,
    exercise_name: &str,
    category: ExerciseCategory,
    sets: Vec<SetRecord>,
) -> WorkoutEntry {
    WorkoutEntry {
        exercise_id: exercise_id.to_owned(),
        exercise_name: exercise_name.to_owned(),
        category,
        sets,
    }
}

/// Request body for `POST /api/workouts`
pub fn workout_body(date: &str, entries: &[WorkoutEntry]) -> Value {
    json!({
        "date": date,
        "entries": entries,
        "notes": null
    })
}
