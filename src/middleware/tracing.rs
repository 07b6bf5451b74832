// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates one span per HTTP request carrying a request ID, method, and path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};
use uuid::Uuid;

/// Header used to correlate a request with its log lines
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span factory for HTTP requests
///
/// Reuses an incoming `x-request-id` header, otherwise generates one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned);

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id,
        )
    }
}

/// Trace layer that logs every response at INFO inside a [`RequestSpan`]
#[must_use]
pub fn request_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// Create a tracing span for database operations
#[must_use]
pub fn create_database_span(operation: &str, table: &str) -> Span {
    tracing::debug_span!(
        "database_operation",
        operation = %operation,
        table = %table,
        rows_affected = tracing::field::Empty,
    )
}
