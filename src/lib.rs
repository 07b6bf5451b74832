// ABOUTME: Main library entry point for the LiftLog workout tracking API
// ABOUTME: Wires the SQLite store, aggregation engine, and REST routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Server
//!
//! A personal fitness-tracking backend. It stores an exercise catalog, logged
//! workouts, and reusable workout templates, and derives dashboard statistics
//! (volume, calories, streaks) and per-exercise progress from the workout log.
//!
//! ## Architecture
//!
//! - **Models / errors**: shared types from `liftlog-core`
//! - **Intelligence**: pure aggregation engine from `liftlog-intelligence`
//! - **Database**: `SQLite` persistence via `sqlx`, exposed through repository traits
//! - **Routes**: `axum` REST endpoints under `/api`
//! - **Config / logging**: environment-driven configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftlog_server::config::environment::ServerConfig;
//! use liftlog_server::database::Database;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database.url.to_connection_string()).await?;
//!     println!("LiftLog configured on port {}", config.http_port);
//!     drop(database);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// `SQLite` persistence for exercises, workouts, and templates
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Statistics and progress aggregation engine
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for CORS and request tracing
pub mod middleware;

/// Common data models for workouts, exercises, and templates
pub mod models;

/// Shared server resources handed to every route
pub mod resources;

/// `HTTP` routes for the REST API
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;
