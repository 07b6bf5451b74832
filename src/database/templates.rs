// ABOUTME: Database operations for reusable workout templates
// ABOUTME: Newest-first listing, lookup, insertion, partial update, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp};
use crate::errors::{AppError, AppResult};
use crate::models::{TemplateExercise, UpdateTemplateRequest, WorkoutTemplate};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Workout template database operations
#[derive(Clone, Debug)]
pub struct TemplateManager {
    pool: SqlitePool,
}

impl TemplateManager {
    /// Create a new template manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List templates, most recently created first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list(&self, limit: u32) -> AppResult<Vec<WorkoutTemplate>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description, exercises, created_at
            FROM templates
            ORDER BY created_at DESC
            LIMIT ?
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list templates: {e}")))?;

        rows.iter().map(row_to_template).collect()
    }

    /// Get a template by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get(&self, id: &str) -> AppResult<Option<WorkoutTemplate>> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, exercises, created_at
            FROM templates
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get template: {e}")))?;

        row.as_ref().map(row_to_template).transpose()
    }

    /// Insert a template
    ///
    /// # Errors
    ///
    /// Returns an error if the exercises cannot be serialized or the insert fails
    pub async fn create(&self, template: &WorkoutTemplate) -> AppResult<()> {
        let exercises_json = serde_json::to_string(&template.exercises)?;

        sqlx::query(
            r"
            INSERT INTO templates (id, name, description, exercises, created_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&template.id)
        .bind(&template.name)
        .bind(&template.description)
        .bind(exercises_json)
        .bind(format_timestamp(&template.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create template: {e}")))?;

        Ok(())
    }

    /// Apply a partial update and return the stored result
    ///
    /// Returns `Ok(None)` when no template has the id. An empty update leaves
    /// the row untouched and returns it as is.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails or a row cannot be decoded
    pub async fn update(
        &self,
        id: &str,
        update: UpdateTemplateRequest,
    ) -> AppResult<Option<WorkoutTemplate>> {
        let Some(mut template) = self.get(id).await? else {
            return Ok(None);
        };
        if update.is_empty() {
            return Ok(Some(template));
        }

        template.apply_update(update);
        let exercises_json = serde_json::to_string(&template.exercises)?;

        sqlx::query(
            r"
            UPDATE templates
            SET name = ?, description = ?, exercises = ?
            WHERE id = ?
            ",
        )
        .bind(&template.name)
        .bind(&template.description)
        .bind(exercises_json)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update template: {e}")))?;

        Ok(Some(template))
    }

    /// Delete a template, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM templates WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete template: {e}")))?;

        Ok(result.rows_affected())
    }
}

fn row_to_template(row: &SqliteRow) -> AppResult<WorkoutTemplate> {
    let exercises_json: String = row.get("exercises");
    let created_at_str: String = row.get("created_at");

    let exercises: Vec<TemplateExercise> = serde_json::from_str(&exercises_json)?;

    Ok(WorkoutTemplate {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        exercises,
        created_at: parse_timestamp(&created_at_str)?,
    })
}
