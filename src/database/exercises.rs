// ABOUTME: Database operations for the exercise catalog
// ABOUTME: Filtered listing, lookup by id, single and bulk insertion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::MAX_EXERCISE_LIST_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseCategory, ExerciseFilter, MuscleGroup};
use regex::{Regex, RegexBuilder};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Exercise catalog database operations
#[derive(Clone, Debug)]
pub struct ExerciseManager {
    pool: SqlitePool,
}

impl ExerciseManager {
    /// Create a new exercise manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List exercises matching a filter, in catalog order
    ///
    /// `search` is a case-insensitive regular expression matched anywhere in
    /// the name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed search pattern, or an error if
    /// the query fails or a row cannot be decoded
    pub async fn list(&self, filter: &ExerciseFilter) -> AppResult<Vec<Exercise>> {
        let pattern = filter
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(compile_search)
            .transpose()?;

        let mut conditions = Vec::new();
        let mut bind_values: Vec<String> = Vec::new();

        if let Some(category) = filter.category {
            conditions.push("category = ?");
            bind_values.push(category.as_str().to_owned());
        }
        if let Some(muscle_group) = filter.muscle_group {
            conditions.push("muscle_group = ?");
            bind_values.push(muscle_group.as_str().to_owned());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            r"
            SELECT id, name, category, muscle_group, description, instructions
            FROM exercises
            {where_clause}
            ORDER BY rowid ASC
            LIMIT ?
            "
        );

        // The name pattern is applied after the fetch, so the cap moves there too
        let sql_limit = if pattern.is_some() {
            -1
        } else {
            i64::from(MAX_EXERCISE_LIST_LIMIT)
        };

        let mut sql_query = sqlx::query(&query);
        for value in &bind_values {
            sql_query = sql_query.bind(value);
        }
        let rows = sql_query
            .bind(sql_limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        let exercises = rows
            .iter()
            .map(row_to_exercise)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(match pattern {
            Some(pattern) => exercises
                .into_iter()
                .filter(|exercise| pattern.is_match(&exercise.name))
                .take(usize::try_from(MAX_EXERCISE_LIST_LIMIT).unwrap_or(usize::MAX))
                .collect(),
            None => exercises,
        })
    }

    /// Get an exercise by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get(&self, id: &str) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            r"
            SELECT id, name, category, muscle_group, description, instructions
            FROM exercises
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get exercise: {e}")))?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    /// Insert a single exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(&self, exercise: &Exercise) -> AppResult<()> {
        insert_exercise(exercise)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create exercise: {e}")))?;
        Ok(())
    }

    /// Insert many exercises in one transaction
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is written in that case
    pub async fn create_many(&self, exercises: &[Exercise]) -> AppResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let mut inserted = 0;
        for exercise in exercises {
            inserted += insert_exercise(exercise)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to insert exercise '{}': {e}", exercise.name))
                })?
                .rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit exercises: {e}")))?;
        Ok(inserted)
    }

    /// Number of exercises in the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count exercises: {e}")))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

fn compile_search(search: &str) -> AppResult<Regex> {
    RegexBuilder::new(search)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            AppError::invalid_input(format!("Invalid search pattern: {e}"))
                .with_details(serde_json::json!({ "search": search }))
        })
}

fn insert_exercise(
    exercise: &Exercise,
) -> sqlx::query::Query<'_, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'_>> {
    sqlx::query(
        r"
        INSERT INTO exercises (id, name, category, muscle_group, description, instructions)
        VALUES (?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(&exercise.id)
    .bind(&exercise.name)
    .bind(exercise.category.as_str())
    .bind(exercise.muscle_group.as_str())
    .bind(&exercise.description)
    .bind(&exercise.instructions)
}

fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    let category_str: String = row.get("category");
    let muscle_group_str: String = row.get("muscle_group");

    let category = ExerciseCategory::parse(&category_str).ok_or_else(|| {
        AppError::database(format!("Unknown exercise category '{category_str}'"))
    })?;
    let muscle_group = MuscleGroup::parse(&muscle_group_str).ok_or_else(|| {
        AppError::database(format!("Unknown muscle group '{muscle_group_str}'"))
    })?;

    Ok(Exercise {
        id: row.get("id"),
        name: row.get("name"),
        category,
        muscle_group,
        description: row.get("description"),
        instructions: row.get("instructions"),
    })
}
