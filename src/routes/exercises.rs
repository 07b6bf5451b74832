// ABOUTME: Route handlers for the exercise catalog REST API
// ABOUTME: Lists with category, muscle group, and name filters; creates and fetches exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ValidatedJson, ValidatedQuery};
use crate::errors::{AppError, AppResult};
use crate::models::{CreateExerciseRequest, Exercise, ExerciseCategory, ExerciseFilter, MuscleGroup};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Query parameters for `GET /api/exercises`
#[derive(Debug, Default, Deserialize)]
pub struct ExerciseListQuery {
    /// Only this category
    pub category: Option<ExerciseCategory>,
    /// Only this muscle group
    pub muscle_group: Option<MuscleGroup>,
    /// Case-insensitive substring of the name
    pub search: Option<String>,
}

impl From<ExerciseListQuery> for ExerciseFilter {
    fn from(query: ExerciseListQuery) -> Self {
        Self {
            category: query.category,
            muscle_group: query.muscle_group,
            search: query.search,
        }
    }
}

/// Exercise routes implementation
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/exercises",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/exercises/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/exercises
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        ValidatedQuery(query): ValidatedQuery<ExerciseListQuery>,
    ) -> AppResult<impl IntoResponse> {
        let exercises = resources.exercises.list(&query.into()).await?;
        Ok(Json(exercises))
    }

    /// Handle POST /api/exercises
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(request): ValidatedJson<CreateExerciseRequest>,
    ) -> AppResult<impl IntoResponse> {
        let exercise = Exercise::from_request(request);
        resources.exercises.insert(&exercise).await?;

        info!(exercise.id = %exercise.id, exercise.name = %exercise.name, "Exercise created");
        Ok(Json(exercise))
    }

    /// Handle GET /api/exercises/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<impl IntoResponse> {
        let exercise = resources
            .exercises
            .find(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise").with_resource_id(id))?;
        Ok(Json(exercise))
    }
}
