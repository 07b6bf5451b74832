// ABOUTME: SQLite database connection, schema migrations, and per-table managers
// ABOUTME: Owns the connection pool shared by the exercise, workout, and template stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Database layer
//!
//! Each table has a manager that issues the SQL (`ExerciseManager`,
//! `WorkoutManager`, `TemplateManager`). Route handlers reach them through
//! the repository traits in [`repositories`].

/// Exercise catalog storage
pub mod exercises;
/// Repository traits and their `SQLite` implementations
pub mod repositories;
/// Built-in exercise catalog
pub mod seed;
/// Workout template storage
pub mod templates;
/// Workout log storage
pub mod workouts;

pub use exercises::ExerciseManager;
pub use templates::TemplateManager;
pub use workouts::WorkoutManager;

use crate::config::environment::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::fs;
use std::str::FromStr;
use tracing::{debug, info};

/// Connections kept by a file-backed pool
const FILE_POOL_MAX_CONNECTIONS: u32 = 5;

/// Handle to the `SQLite` store
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations
    ///
    /// Accepts `sqlite:<path>` URLs and `sqlite::memory:`. Parent directories
    /// of a file database are created when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the connection fails, or a
    /// migration statement fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let parsed = DatabaseUrl::parse_url(database_url);
        let connection_string = parsed.to_connection_string();

        if let DatabaseUrl::SQLite { path } = &parsed {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::config(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        // An in-memory database lives only as long as its connection
        let pool_options = if parsed.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(FILE_POOL_MAX_CONNECTIONS)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let database = Self { pool };
        database.migrate().await?;

        info!(database = %connection_string, "Database ready");
        Ok(database)
    }

    /// Underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Manager for the exercise catalog
    #[must_use]
    pub fn exercises(&self) -> ExerciseManager {
        ExerciseManager::new(self.pool.clone())
    }

    /// Manager for logged workouts
    #[must_use]
    pub fn workouts(&self) -> WorkoutManager {
        WorkoutManager::new(self.pool.clone())
    }

    /// Manager for workout templates
    #[must_use]
    pub fn templates(&self) -> TemplateManager {
        TemplateManager::new(self.pool.clone())
    }

    /// Run all schema migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any migration statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_exercises().await?;
        self.migrate_workouts().await?;
        self.migrate_templates().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    async fn migrate_exercises(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL CHECK (category IN ('strength', 'cardio')),
                muscle_group TEXT NOT NULL,
                description TEXT,
                instructions TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercises table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_muscle_group ON exercises(muscle_group)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create exercises index: {e}")))?;

        Ok(())
    }

    async fn migrate_workouts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                entries TEXT NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workouts table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(date)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create workouts index: {e}")))?;

        Ok(())
    }

    async fn migrate_templates(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS templates (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT,
                exercises TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create templates table: {e}")))?;

        Ok(())
    }
}

/// Timestamp text stored in `created_at` columns; fixed width so it sorts
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored `created_at` column
pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid stored timestamp '{value}': {e}")))
}
