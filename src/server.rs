// ABOUTME: HTTP server assembly and lifecycle for the LiftLog API
// ABOUTME: Builds resources, layers middleware over the routes, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::middleware::{request_trace_layer, setup_cors};
use crate::resources::ServerResources;
use crate::routes::api_routes;
use anyhow::Context;
use axum::{http::StatusCode, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

/// The LiftLog HTTP server
pub struct LiftLogServer {
    resources: Arc<ServerResources>,
}

impl LiftLogServer {
    /// Create a server over prepared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Connect to the database and seed the catalog if configured
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or seeding fails
    pub async fn bootstrap(config: ServerConfig) -> AppResult<Arc<ServerResources>> {
        let database = Database::new(&config.database.url.to_connection_string()).await?;
        let seed = config.database.seed_exercises;
        let resources = Arc::new(ServerResources::new(database, Arc::new(config)));

        if seed {
            resources.exercises.seed_defaults().await?;
        }

        Ok(resources)
    }

    /// Full application router with middleware applied
    pub fn router(&self) -> Router {
        let config = &self.resources.config;

        api_routes(&self.resources)
            .fallback(handle_unknown_route)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.request_timeout_secs),
            ))
            .layer(setup_cors(&config.cors))
            .layer(request_trace_layer())
    }

    /// Bind and serve until Ctrl-C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Arc::clone(&self.resources.config);
        let address = format!("{}:{}", config.host, config.http_port);

        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;
        info!("LiftLog API listening on http://{address}/api");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        self.resources.database.pool().close().await;
        info!("LiftLog API stopped");
        Ok(())
    }
}

async fn handle_unknown_route() -> AppError {
    AppError::not_found("Endpoint")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
