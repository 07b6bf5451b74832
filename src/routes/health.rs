// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness without touching the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{routing::get, Json, Router};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        Router::new().route("/api/health", get(Self::handle_health))
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({ "status": "healthy" }))
    }
}
