// ABOUTME: Integration tests for the workout template route handlers
// ABOUTME: Covers create, list ordering, partial update semantics, and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::create_test_router;
use helpers::axum_test::AxumTestRequest;
use liftlog_server::models::{ExerciseCategory, WorkoutTemplate};
use serde_json::{json, Value};

async fn create_template(router: &axum::Router, name: &str) -> WorkoutTemplate {
    AxumTestRequest::post("/api/templates")
        .json(&json!({
            "name": name,
            "description": "Heavy compound day",
            "exercises": [
                { "exercise_id": "squat", "exercise_name": "Squat", "category": "strength", "default_sets": 5 },
                { "exercise_id": "row", "exercise_name": "Rowing", "category": "cardio" }
            ]
        }))
        .send(router.clone())
        .await
        .assert_status(StatusCode::OK)
        .json()
}

#[tokio::test]
async fn test_create_and_get_template() {
    let (router, _) = create_test_router(false).await.unwrap();
    let created = create_template(&router, "Leg Day").await;

    assert_eq!(created.name, "Leg Day");
    assert_eq!(created.exercises.len(), 2);
    assert_eq!(created.exercises[0].default_sets, 5);
    // default_sets falls back to 3 when omitted
    assert_eq!(created.exercises[1].default_sets, 3);
    assert_eq!(created.exercises[1].category, ExerciseCategory::Cardio);

    let fetched: WorkoutTemplate = AxumTestRequest::get(&format!("/api/templates/{}", created.id))
        .send(router)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_templates_newest_first() {
    let (router, _) = create_test_router(false).await.unwrap();
    create_template(&router, "First").await;
    create_template(&router, "Second").await;
    create_template(&router, "Third").await;

    let templates: Vec<WorkoutTemplate> = AxumTestRequest::get("/api/templates")
        .send(router)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_partial_update_keeps_unspecified_fields() {
    let (router, _) = create_test_router(false).await.unwrap();
    let created = create_template(&router, "Push").await;

    let updated: WorkoutTemplate = AxumTestRequest::put(&format!("/api/templates/{}", created.id))
        .json(&json!({ "name": "Push (heavy)" }))
        .send(router.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(updated.name, "Push (heavy)");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.exercises, created.exercises);
    assert_eq!(updated.created_at, created.created_at);

    let replaced: WorkoutTemplate = AxumTestRequest::put(&format!("/api/templates/{}", created.id))
        .json(&json!({ "exercises": [] }))
        .send(router.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(replaced.name, "Push (heavy)");
    assert!(replaced.exercises.is_empty());

    // An empty body changes nothing
    let unchanged: WorkoutTemplate = AxumTestRequest::put(&format!("/api/templates/{}", created.id))
        .json(&json!({}))
        .send(router)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(unchanged, replaced);
}

#[tokio::test]
async fn test_update_unknown_template_is_404() {
    let (router, _) = create_test_router(false).await.unwrap();

    let body: Value = AxumTestRequest::put("/api/templates/missing")
        .json(&json!({ "name": "Anything" }))
        .send(router)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["error"]["message"], "Template not found");
}

#[tokio::test]
async fn test_delete_template() {
    let (router, _) = create_test_router(false).await.unwrap();
    let created = create_template(&router, "Pull").await;

    let body: Value = AxumTestRequest::delete(&format!("/api/templates/{}", created.id))
        .send(router.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["message"], "Template deleted");

    AxumTestRequest::delete(&format!("/api/templates/{}", created.id))
        .send(router)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
