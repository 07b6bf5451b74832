// ABOUTME: Route handlers for dashboard statistics, exercise progress, and recent workouts
// ABOUTME: Loads workout history from the store and hands it to the aggregation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Aggregation routes
//!
//! Statistics are recomputed from stored workouts on every request. The
//! history read is capped at `MAX_AGGREGATION_RECORDS`, newest first.

use super::ValidatedQuery;
use crate::constants::limits::{
    DEFAULT_PROGRESS_DAYS, MAX_AGGREGATION_RECORDS, MAX_PROGRESS_DAYS, RECENT_WORKOUTS_LIMIT,
};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{compute_dashboard_stats, compute_progress, streaks::day_key};
use crate::models::WorkoutFilter;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for `GET /api/progress/:exercise_id`
#[derive(Debug, Default, Deserialize)]
pub struct ProgressQuery {
    /// Lookback window in days
    pub days: Option<u32>,
}

impl ProgressQuery {
    /// Window in days, defaulted and checked against the maximum
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `days` exceeds the maximum window
    pub fn window_days(&self) -> AppResult<u32> {
        let days = self.days.unwrap_or(DEFAULT_PROGRESS_DAYS);
        if days > MAX_PROGRESS_DAYS {
            return Err(AppError::out_of_range(format!(
                "days must be at most {MAX_PROGRESS_DAYS}"
            ))
            .with_details(serde_json::json!({ "days": days, "max": MAX_PROGRESS_DAYS })));
        }
        Ok(days)
    }
}

/// Statistics routes implementation
pub struct StatsRoutes;

impl StatsRoutes {
    /// Create all aggregation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/stats", get(Self::handle_stats))
            .route("/api/progress/:exercise_id", get(Self::handle_progress))
            .route("/api/recent-workouts", get(Self::handle_recent))
            .with_state(resources)
    }

    /// Handle GET /api/stats
    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<impl IntoResponse> {
        let filter = WorkoutFilter {
            limit: Some(MAX_AGGREGATION_RECORDS),
            ..WorkoutFilter::default()
        };
        let records = resources.workouts.list(&filter).await?;

        let stats = compute_dashboard_stats(&records, Utc::now().date_naive());
        Ok(Json(stats))
    }

    /// Handle GET /api/progress/:exercise_id
    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
        Path(exercise_id): Path<String>,
        ValidatedQuery(query): ValidatedQuery<ProgressQuery>,
    ) -> AppResult<impl IntoResponse> {
        let days = query.window_days()?;
        let today = Utc::now().date_naive();

        // The engine applies the same window; narrowing here keeps the read small
        let filter = WorkoutFilter {
            start_date: Some(day_key(today - Duration::days(i64::from(days)))),
            end_date: None,
            limit: Some(MAX_AGGREGATION_RECORDS),
        };
        let records = resources.workouts.list(&filter).await?;

        let progress = compute_progress(&records, &exercise_id, today, days);
        Ok(Json(progress))
    }

    /// Handle GET /api/recent-workouts
    async fn handle_recent(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<impl IntoResponse> {
        let filter = WorkoutFilter {
            limit: Some(RECENT_WORKOUTS_LIMIT),
            ..WorkoutFilter::default()
        };
        let workouts = resources.workouts.list(&filter).await?;
        Ok(Json(workouts))
    }
}
