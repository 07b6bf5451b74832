// ABOUTME: Route handlers for the workout template REST API
// ABOUTME: Create, list, fetch, partially update, and delete reusable templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ValidatedJson;
use crate::constants::limits::MAX_TEMPLATE_LIST_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::models::{CreateTemplateRequest, UpdateTemplateRequest, WorkoutTemplate};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Template routes implementation
pub struct TemplateRoutes;

impl TemplateRoutes {
    /// Create all template routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/templates",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/templates/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/templates
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<impl IntoResponse> {
        let templates = resources.templates.list(MAX_TEMPLATE_LIST_LIMIT).await?;
        Ok(Json(templates))
    }

    /// Handle POST /api/templates
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(request): ValidatedJson<CreateTemplateRequest>,
    ) -> AppResult<impl IntoResponse> {
        let template = WorkoutTemplate::from_request(request, Utc::now());
        resources.templates.insert(&template).await?;

        info!(template.id = %template.id, template.name = %template.name, "Template created");
        Ok(Json(template))
    }

    /// Handle GET /api/templates/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<impl IntoResponse> {
        let template = resources
            .templates
            .find(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Template").with_resource_id(id))?;
        Ok(Json(template))
    }

    /// Handle PUT /api/templates/:id - fields left out of the body are kept
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        ValidatedJson(update): ValidatedJson<UpdateTemplateRequest>,
    ) -> AppResult<impl IntoResponse> {
        let template = resources
            .templates
            .update(&id, update)
            .await?
            .ok_or_else(|| AppError::not_found("Template").with_resource_id(id))?;
        Ok(Json(template))
    }

    /// Handle DELETE /api/templates/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<impl IntoResponse> {
        let deleted = resources.templates.delete(&id).await?;
        if deleted == 0 {
            return Err(AppError::not_found("Template").with_resource_id(id));
        }
        Ok(Json(serde_json::json!({ "message": "Template deleted" })))
    }
}
