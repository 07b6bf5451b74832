// ABOUTME: Repository traits for the exercise catalog, workout log, and templates
// ABOUTME: Route handlers depend on these traits rather than on concrete SQL managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository pattern for data access
//!
//! Each trait covers one table. The `*Impl` types wrap a [`Database`] and
//! delegate to its managers.
//!
//! [`Database`]: crate::database::Database

/// `SQLite` implementation of [`ExerciseRepository`]
pub mod exercise_repository;
/// `SQLite` implementation of [`TemplateRepository`]
pub mod template_repository;
/// `SQLite` implementation of [`WorkoutRepository`]
pub mod workout_repository;

pub use exercise_repository::ExerciseRepositoryImpl;
pub use template_repository::TemplateRepositoryImpl;
pub use workout_repository::WorkoutRepositoryImpl;

use crate::errors::AppResult;
use crate::models::{
    Exercise, ExerciseFilter, UpdateTemplateRequest, WorkoutFilter, WorkoutRecord, WorkoutTemplate,
};
use async_trait::async_trait;

/// Access to logged workouts
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Workouts in the filter's inclusive date range, newest date first
    async fn list(&self, filter: &WorkoutFilter) -> AppResult<Vec<WorkoutRecord>>;

    /// A single workout by id
    async fn find(&self, id: &str) -> AppResult<Option<WorkoutRecord>>;

    /// Store a new workout
    async fn insert(&self, record: &WorkoutRecord) -> AppResult<()>;

    /// Remove a workout; returns how many rows were deleted
    async fn delete(&self, id: &str) -> AppResult<u64>;
}

/// Access to the exercise catalog
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Exercises matching the filter
    async fn list(&self, filter: &ExerciseFilter) -> AppResult<Vec<Exercise>>;

    /// A single exercise by id
    async fn find(&self, id: &str) -> AppResult<Option<Exercise>>;

    /// Store a new exercise
    async fn insert(&self, exercise: &Exercise) -> AppResult<()>;

    /// Seed the built-in catalog when empty; returns how many were inserted
    async fn seed_defaults(&self) -> AppResult<u64>;
}

/// Access to workout templates
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Templates, most recently created first, at most `limit`
    async fn list(&self, limit: u32) -> AppResult<Vec<WorkoutTemplate>>;

    /// A single template by id
    async fn find(&self, id: &str) -> AppResult<Option<WorkoutTemplate>>;

    /// Store a new template
    async fn insert(&self, template: &WorkoutTemplate) -> AppResult<()>;

    /// Apply a partial update; `None` when the template does not exist
    async fn update(
        &self,
        id: &str,
        update: UpdateTemplateRequest,
    ) -> AppResult<Option<WorkoutTemplate>>;

    /// Remove a template; returns how many rows were deleted
    async fn delete(&self, id: &str) -> AppResult<u64>;
}
