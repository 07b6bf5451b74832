// ABOUTME: Exercise catalog seeding utility for the LiftLog server
// ABOUTME: Inserts the built-in exercises into an empty catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise catalog seeder.
//!
//! Usage:
//! ```bash
//! # Uses DATABASE_URL from the environment
//! cargo run --bin seed-exercises
//!
//! # Override database URL
//! cargo run --bin seed-exercises -- --database-url sqlite:./data/liftlog.db
//! ```

use anyhow::Result;
use clap::Parser;
use liftlog_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::{seed::seed_exercises, Database},
    logging::{LogFormat, LoggingConfig},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-exercises",
    about = "LiftLog exercise catalog seeder",
    long_about = "Insert the built-in exercise catalog when the exercise table is empty"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let logging_config = LoggingConfig {
        level: if args.verbose { "debug" } else { "info" }.to_owned(),
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };
    logging_config.init()?;

    let database_url = match args.database_url {
        Some(url) => DatabaseUrl::parse_url(&url),
        None => ServerConfig::from_env()?.database.url,
    };

    let database = Database::new(&database_url.to_connection_string()).await?;
    let inserted = seed_exercises(&database.exercises()).await?;

    if inserted == 0 {
        info!("Exercise catalog already populated; nothing to do");
    } else {
        info!("Inserted {inserted} exercises into {database_url}");
    }

    Ok(())
}
