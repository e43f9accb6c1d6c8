//! Blog MCP Server - Main entry point.
//!
//! This server exposes a users/posts SQLite dataset to AI assistants via
//! MCP (Model Context Protocol) resources, tools, and prompts.

use blog_mcp_server::config::{Config, TransportMode};
use blog_mcp_server::db::{SeedSummary, Store, seed, with_session};
use blog_mcp_server::transport::{HttpTransport, StdioTransport, Transport};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse configuration from command line and environment
    let config = Config::parse();

    // Initialize logging
    init_tracing(&config);

    info!(
        transport = %config.transport,
        database = %config.database.display(),
        "Starting Blog MCP Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Open the store; the database file and schema are created on first use
    let store = Arc::new(Store::open(&config.database).await?);

    // Populate the database with sample data unless it already has some
    if config.skip_seed {
        info!("Seeding skipped by configuration");
    } else {
        let envelope = with_session(&store, |session| Box::pin(seed(session))).await;
        if let Some(message) = envelope.error_message() {
            error!(error = %message, "Database seeding failed");
            return Err(message.to_string().into());
        }
        let summary = envelope
            .data()
            .cloned()
            .and_then(|data| serde_json::from_value::<SeedSummary>(data).ok());
        match summary {
            Some(summary) if summary.seeded => {
                info!(
                    users = summary.users,
                    posts = summary.posts,
                    "Database seeded with sample data"
                );
            }
            _ => info!("Database already has data, skipping seed"),
        }
    }

    // Run the appropriate transport
    let result = match config.transport {
        TransportMode::Stdio => {
            info!("Using stdio transport");
            let transport = StdioTransport::new(store);
            transport.run().await
        }
        TransportMode::Http => {
            info!(
                host = %config.http_host,
                port = config.http_port,
                endpoint = %config.mcp_endpoint,
                "Using HTTP transport"
            );
            let transport = HttpTransport::new(
                store,
                &config.http_host,
                config.http_port,
                &config.mcp_endpoint,
            );
            transport.run().await
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}
