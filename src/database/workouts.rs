// ABOUTME: Database operations for logged workouts
// ABOUTME: Date-range listing newest first, lookup, insertion, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp};
use crate::errors::{AppError, AppResult};
use crate::middleware::create_database_span;
use crate::models::{WorkoutEntry, WorkoutFilter, WorkoutRecord};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::Instrument;

/// Workout log database operations
#[derive(Clone, Debug)]
pub struct WorkoutManager {
    pool: SqlitePool,
}

impl WorkoutManager {
    /// Create a new workout manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List workouts within an inclusive date range, newest date first
    ///
    /// Without a limit every matching row is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list(&self, filter: &WorkoutFilter) -> AppResult<Vec<WorkoutRecord>> {
        let mut conditions = Vec::new();
        let mut bind_values: Vec<&str> = Vec::new();

        if let Some(start) = filter.start_date.as_deref() {
            conditions.push("date >= ?");
            bind_values.push(start);
        }
        if let Some(end) = filter.end_date.as_deref() {
            conditions.push("date <= ?");
            bind_values.push(end);
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // SQLite treats a negative LIMIT as no limit
        let limit = filter.limit.map_or(-1, i64::from);

        let query = format!(
            r"
            SELECT id, date, entries, notes, created_at
            FROM workouts
            {where_clause}
            ORDER BY date DESC, created_at DESC
            LIMIT ?
            "
        );

        let span = create_database_span("list", "workouts");
        let mut sql_query = sqlx::query(&query);
        for value in bind_values {
            sql_query = sql_query.bind(value);
        }
        let rows = sql_query
            .bind(limit)
            .fetch_all(&self.pool)
            .instrument(span.clone())
            .await
            .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;
        span.record("rows_affected", rows.len());

        rows.iter().map(row_to_workout).collect()
    }

    /// Get a workout by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get(&self, id: &str) -> AppResult<Option<WorkoutRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, date, entries, notes, created_at
            FROM workouts
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout: {e}")))?;

        row.as_ref().map(row_to_workout).transpose()
    }

    /// Insert a workout
    ///
    /// # Errors
    ///
    /// Returns an error if the entries cannot be serialized or the insert fails
    pub async fn create(&self, workout: &WorkoutRecord) -> AppResult<()> {
        let entries_json = serde_json::to_string(&workout.entries)?;

        sqlx::query(
            r"
            INSERT INTO workouts (id, date, entries, notes, created_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&workout.id)
        .bind(&workout.date)
        .bind(entries_json)
        .bind(&workout.notes)
        .bind(format_timestamp(&workout.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout: {e}")))?;

        Ok(())
    }

    /// Delete a workout, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout: {e}")))?;

        Ok(result.rows_affected())
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<WorkoutRecord> {
    let entries_json: String = row.get("entries");
    let created_at_str: String = row.get("created_at");

    let entries: Vec<WorkoutEntry> = serde_json::from_str(&entries_json)?;

    Ok(WorkoutRecord {
        id: row.get("id"),
        date: row.get("date"),
        entries,
        notes: row.get("notes"),
        created_at: parse_timestamp(&created_at_str)?,
    })
}
