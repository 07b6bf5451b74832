// ABOUTME: Integration tests for the SQLite workout and template managers
// ABOUTME: Checks persistence of nested entries, date filtering, deletes, and file-backed reopening
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use common::{cardio_set, create_test_database, entry, strength_set};
use liftlog_server::database::repositories::{WorkoutRepository, WorkoutRepositoryImpl};
use liftlog_server::database::{seed::seed_exercises, Database};
use liftlog_server::models::{
    CreateTemplateRequest, CreateWorkoutRequest, ExerciseCategory, TemplateExercise,
    UpdateTemplateRequest, WorkoutFilter, WorkoutRecord, WorkoutTemplate,
};

fn record(date: &str) -> WorkoutRecord {
    WorkoutRecord::from_request(
        CreateWorkoutRequest {
            date: date.to_owned(),
            entries: vec![
                entry(
                    "deadlift",
                    "Deadlift",
                    ExerciseCategory::Strength,
                    vec![strength_set(1, 180.0, 3)],
                ),
                entry(
                    "bike",
                    "Cycling",
                    ExerciseCategory::Cardio,
                    vec![cardio_set(1, 40.0, 15.5)],
                ),
            ],
            notes: Some("felt strong".to_owned()),
        },
        Utc::now(),
    )
}

#[tokio::test]
async fn test_workout_entries_persist_intact() {
    let database = create_test_database().await.unwrap();
    let workouts = database.workouts();

    let original = record("2025-06-18");
    workouts.create(&original).await.unwrap();

    let stored = workouts.get(&original.id).await.unwrap().unwrap();
    assert_eq!(stored, original);
    assert_eq!(stored.entries[1].sets[0].distance_km, Some(15.5));
}

#[tokio::test]
async fn test_workout_filter_bounds_are_inclusive() {
    let database = create_test_database().await.unwrap();
    let workouts = database.workouts();

    for date in ["2025-05-31", "2025-06-01", "2025-06-15", "2025-06-30", "2025-07-01"] {
        workouts.create(&record(date)).await.unwrap();
    }

    let filter = WorkoutFilter {
        start_date: Some("2025-06-01".to_owned()),
        end_date: Some("2025-06-30".to_owned()),
        limit: None,
    };
    let june = workouts.list(&filter).await.unwrap();
    let dates: Vec<&str> = june.iter().map(|w| w.date.as_str()).collect();
    assert_eq!(dates, ["2025-06-30", "2025-06-15", "2025-06-01"]);
}

#[tokio::test]
async fn test_repository_delete_reports_rows() {
    let database = create_test_database().await.unwrap();
    let repository = WorkoutRepositoryImpl::new(database.clone());

    let workout = record("2025-06-18");
    repository.insert(&workout).await.unwrap();

    assert_eq!(repository.delete(&workout.id).await.unwrap(), 1);
    assert_eq!(repository.delete(&workout.id).await.unwrap(), 0);
    assert!(repository.find(&workout.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unlimited_list_returns_everything() {
    let database = create_test_database().await.unwrap();
    let workouts = database.workouts();

    for day in 1..=12 {
        workouts
            .create(&record(&format!("2025-06-{day:02}")))
            .await
            .unwrap();
    }

    let all = workouts.list(&WorkoutFilter::default()).await.unwrap();
    assert_eq!(all.len(), 12);
    assert_eq!(all[0].date, "2025-06-12");
}

#[tokio::test]
async fn test_template_update_round_trip() {
    let database = create_test_database().await.unwrap();
    let templates = database.templates();

    let template = WorkoutTemplate::from_request(
        CreateTemplateRequest {
            name: "Upper".to_owned(),
            description: None,
            exercises: vec![TemplateExercise {
                exercise_id: "ohp".to_owned(),
                exercise_name: "Overhead Press".to_owned(),
                category: ExerciseCategory::Strength,
                default_sets: 4,
            }],
        },
        Utc::now(),
    );
    templates.create(&template).await.unwrap();

    let update = UpdateTemplateRequest {
        description: Some("Shoulders first".to_owned()),
        ..UpdateTemplateRequest::default()
    };
    let updated = templates.update(&template.id, update).await.unwrap().unwrap();
    assert_eq!(updated.name, "Upper");
    assert_eq!(updated.description.as_deref(), Some("Shoulders first"));

    let stored = templates.get(&template.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);

    assert!(templates
        .update("missing", UpdateTemplateRequest::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("liftlog.db");
    let url = format!("sqlite:{}", path.display());

    let original = record("2025-06-18");
    {
        let database = Database::new(&url).await.unwrap();
        database.workouts().create(&original).await.unwrap();
        assert_eq!(seed_exercises(&database.exercises()).await.unwrap(), 100);
        database.pool().close().await;
    }
    assert!(path.exists());

    let reopened = Database::new(&url).await.unwrap();
    let stored = reopened.workouts().get(&original.id).await.unwrap().unwrap();
    assert_eq!(stored, original);
    // Catalog already present, nothing inserted the second time
    assert_eq!(seed_exercises(&reopened.exercises()).await.unwrap(), 0);
    assert_eq!(reopened.exercises().count().await.unwrap(), 100);
}
