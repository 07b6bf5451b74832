// ABOUTME: LiftLog API server binary
// ABOUTME: Loads configuration, initializes logging and storage, then serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LiftLog API Server Binary
//!
//! ```bash
//! cargo run --bin liftlog-server
//! cargo run --bin liftlog-server -- --http-port 9000 --database-url sqlite::memory:
//! ```

use anyhow::Result;
use clap::Parser;
use liftlog_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    logging::LoggingConfig,
    server::LiftLogServer,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "liftlog-server")]
#[command(about = "LiftLog - workout tracking API with streaks, volume, and progress")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url);
    }

    LoggingConfig::for_server(&config).init()?;

    info!("Starting LiftLog API");
    info!("{}", config.summary());

    let resources = LiftLogServer::bootstrap(config).await?;
    let server = LiftLogServer::new(resources);

    if let Err(e) = server.run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
