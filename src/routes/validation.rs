// ABOUTME: Extractors wrapping axum's Json and Query with AppError rejections
// ABOUTME: Malformed bodies and query strings become 400 responses in the standard error shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, ErrorCode};
use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejection is an [`AppError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| json_rejection_to_error(&rejection))
    }
}

/// Query string extractor whose rejection is an [`AppError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| query_rejection_to_error(&rejection))
    }
}

fn json_rejection_to_error(rejection: &JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonSyntaxError(_) => {
            AppError::new(ErrorCode::InvalidFormat, "Invalid JSON syntax")
                .with_details(serde_json::json!({ "reason": rejection.body_text() }))
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::invalid_input("Missing Content-Type: application/json header")
        }
        JsonRejection::JsonDataError(_) => AppError::invalid_input("Invalid JSON data")
            .with_details(serde_json::json!({ "reason": rejection.body_text() })),
        _ => AppError::invalid_input(rejection.body_text()),
    }
}

fn query_rejection_to_error(rejection: &QueryRejection) -> AppError {
    AppError::invalid_input("Invalid query parameters")
        .with_details(serde_json::json!({ "reason": rejection.body_text() }))
}
