// ABOUTME: Configuration module root
// ABOUTME: Environment-driven server, database, and CORS settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management

/// Environment-based configuration for deployment-specific settings
pub mod environment;

pub use environment::{CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
