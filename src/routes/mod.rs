// ABOUTME: Route module organization for the LiftLog REST API
// ABOUTME: Groups endpoints by domain and merges them into one router under /api
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the LiftLog server
//!
//! Each domain module holds route definitions and thin handlers that call the
//! repositories and the aggregation engine.

/// Exercise catalog routes
pub mod exercises;
/// Health check route
pub mod health;
/// Dashboard statistics, progress, and recent-workout routes
pub mod stats;
/// Workout template routes
pub mod templates;
/// Request extractors that turn rejections into `AppError`
pub mod validation;
/// Workout log routes
pub mod workouts;

pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use stats::StatsRoutes;
pub use templates::TemplateRoutes;
pub use validation::{ValidatedJson, ValidatedQuery};
pub use workouts::WorkoutRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// Every API route, merged into one router
pub fn api_routes(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ExerciseRoutes::routes(Arc::clone(resources)))
        .merge(WorkoutRoutes::routes(Arc::clone(resources)))
        .merge(TemplateRoutes::routes(Arc::clone(resources)))
        .merge(StatsRoutes::routes(Arc::clone(resources)))
}
