// ABOUTME: Shared server resources handed to every route group
// ABOUTME: Bundles configuration, the database handle, and the repository trait objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::ServerConfig;
use crate::database::repositories::{
    ExerciseRepository, ExerciseRepositoryImpl, TemplateRepository, TemplateRepositoryImpl,
    WorkoutRepository, WorkoutRepositoryImpl,
};
use crate::database::Database;
use std::sync::Arc;

/// Centralized resource container shared across handlers
///
/// Built once at startup and cloned cheaply (every field is an `Arc`).
#[derive(Clone)]
pub struct ServerResources {
    /// Database handle
    pub database: Arc<Database>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Exercise catalog access
    pub exercises: Arc<dyn ExerciseRepository>,
    /// Workout log access
    pub workouts: Arc<dyn WorkoutRepository>,
    /// Template access
    pub templates: Arc<dyn TemplateRepository>,
}

impl ServerResources {
    /// Create resources with the `SQLite` repository implementations
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            exercises: Arc::new(ExerciseRepositoryImpl::new(database.clone())),
            workouts: Arc::new(WorkoutRepositoryImpl::new(database.clone())),
            templates: Arc::new(TemplateRepositoryImpl::new(database.clone())),
            database: Arc::new(database),
            config,
        }
    }
}
