// ABOUTME: Workout repository implementation backed by the SQLite workout manager
// ABOUTME: Provides listing, lookup, insertion, and deletion of logged workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutRepository;
use crate::database::{Database, WorkoutManager};
use crate::errors::AppResult;
use crate::models::{WorkoutFilter, WorkoutRecord};
use async_trait::async_trait;

/// `SQLite` implementation of `WorkoutRepository`
pub struct WorkoutRepositoryImpl {
    db: Database,
}

impl WorkoutRepositoryImpl {
    /// Create a new `WorkoutRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    fn get_manager(&self) -> WorkoutManager {
        self.db.workouts()
    }
}

#[async_trait]
impl WorkoutRepository for WorkoutRepositoryImpl {
    async fn list(&self, filter: &WorkoutFilter) -> AppResult<Vec<WorkoutRecord>> {
        self.get_manager().list(filter).await
    }

    async fn find(&self, id: &str) -> AppResult<Option<WorkoutRecord>> {
        self.get_manager().get(id).await
    }

    async fn insert(&self, record: &WorkoutRecord) -> AppResult<()> {
        self.get_manager().create(record).await
    }

    async fn delete(&self, id: &str) -> AppResult<u64> {
        self.get_manager().delete(id).await
    }
}
