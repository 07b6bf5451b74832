// ABOUTME: Template repository implementation backed by the SQLite template manager
// ABOUTME: Provides listing, lookup, insertion, partial update, and deletion of templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::TemplateRepository;
use crate::database::{Database, TemplateManager};
use crate::errors::AppResult;
use crate::models::{UpdateTemplateRequest, WorkoutTemplate};
use async_trait::async_trait;

/// `SQLite` implementation of `TemplateRepository`
pub struct TemplateRepositoryImpl {
    db: Database,
}

impl TemplateRepositoryImpl {
    /// Create a new `TemplateRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    fn get_manager(&self) -> TemplateManager {
        self.db.templates()
    }
}

#[async_trait]
impl TemplateRepository for TemplateRepositoryImpl {
    async fn list(&self, limit: u32) -> AppResult<Vec<WorkoutTemplate>> {
        self.get_manager().list(limit).await
    }

    async fn find(&self, id: &str) -> AppResult<Option<WorkoutTemplate>> {
        self.get_manager().get(id).await
    }

    async fn insert(&self, template: &WorkoutTemplate) -> AppResult<()> {
        self.get_manager().create(template).await
    }

    async fn update(
        &self,
        id: &str,
        update: UpdateTemplateRequest,
    ) -> AppResult<Option<WorkoutTemplate>> {
        self.get_manager().update(id, update).await
    }

    async fn delete(&self, id: &str) -> AppResult<u64> {
        self.get_manager().delete(id).await
    }
}
