// ABOUTME: Route handlers for the workout log REST API
// ABOUTME: Logs, lists by date range, fetches, and deletes workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ValidatedJson, ValidatedQuery};
use crate::constants::limits::{DEFAULT_WORKOUT_LIST_LIMIT, MAX_WORKOUT_LIST_LIMIT};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{CreateWorkoutRequest, WorkoutFilter, WorkoutRecord};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for `GET /api/workouts`
#[derive(Debug, Default, Deserialize)]
pub struct WorkoutListQuery {
    /// Inclusive lower bound on `date`
    pub start_date: Option<String>,
    /// Inclusive upper bound on `date`
    pub end_date: Option<String>,
    /// Page size, at most 100
    pub limit: Option<u32>,
}

impl WorkoutListQuery {
    /// Validate the limit and build a store filter
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `limit` exceeds the maximum page size
    pub fn into_filter(self) -> AppResult<WorkoutFilter> {
        let limit = self.limit.unwrap_or(DEFAULT_WORKOUT_LIST_LIMIT);
        if limit > MAX_WORKOUT_LIST_LIMIT {
            return Err(AppError::out_of_range(format!(
                "limit must be at most {MAX_WORKOUT_LIST_LIMIT}"
            ))
            .with_details(serde_json::json!({ "limit": limit, "max": MAX_WORKOUT_LIST_LIMIT })));
        }

        Ok(WorkoutFilter {
            start_date: self.start_date,
            end_date: self.end_date,
            limit: Some(limit),
        })
    }
}

/// Workout routes implementation
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/workouts",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/workouts/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /api/workouts
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(request): ValidatedJson<CreateWorkoutRequest>,
    ) -> AppResult<impl IntoResponse> {
        let workout = WorkoutRecord::from_request(request, Utc::now());
        resources.workouts.insert(&workout).await?;

        AppLogger::log_workout_event(&workout.id, "created", workout.entries.len());
        Ok(Json(workout))
    }

    /// Handle GET /api/workouts
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        ValidatedQuery(query): ValidatedQuery<WorkoutListQuery>,
    ) -> AppResult<impl IntoResponse> {
        let filter = query.into_filter()?;
        let workouts = resources.workouts.list(&filter).await?;
        Ok(Json(workouts))
    }

    /// Handle GET /api/workouts/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<impl IntoResponse> {
        let workout = resources
            .workouts
            .find(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout").with_resource_id(id))?;
        Ok(Json(workout))
    }

    /// Handle DELETE /api/workouts/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<impl IntoResponse> {
        let deleted = resources.workouts.delete(&id).await?;
        if deleted == 0 {
            return Err(AppError::not_found("Workout").with_resource_id(id));
        }

        AppLogger::log_workout_event(&id, "deleted", 0);
        Ok(Json(serde_json::json!({ "message": "Workout deleted" })))
    }
}
