// ABOUTME: Exercise repository implementation backed by the SQLite exercise manager
// ABOUTME: Provides filtered catalog queries, insertion, and first-run seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ExerciseRepository;
use crate::database::seed::seed_exercises;
use crate::database::{Database, ExerciseManager};
use crate::errors::AppResult;
use crate::models::{Exercise, ExerciseFilter};
use async_trait::async_trait;

/// `SQLite` implementation of `ExerciseRepository`
pub struct ExerciseRepositoryImpl {
    db: Database,
}

impl ExerciseRepositoryImpl {
    /// Create a new `ExerciseRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    fn get_manager(&self) -> ExerciseManager {
        self.db.exercises()
    }
}

#[async_trait]
impl ExerciseRepository for ExerciseRepositoryImpl {
    async fn list(&self, filter: &ExerciseFilter) -> AppResult<Vec<Exercise>> {
        self.get_manager().list(filter).await
    }

    async fn find(&self, id: &str) -> AppResult<Option<Exercise>> {
        self.get_manager().get(id).await
    }

    async fn insert(&self, exercise: &Exercise) -> AppResult<()> {
        self.get_manager().create(exercise).await
    }

    async fn seed_defaults(&self) -> AppResult<u64> {
        seed_exercises(&self.get_manager()).await
    }
}
