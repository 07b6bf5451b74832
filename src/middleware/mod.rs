// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID spans and the CORS layer applied to every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request tracing and span creation
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{create_database_span, request_trace_layer, RequestSpan};
