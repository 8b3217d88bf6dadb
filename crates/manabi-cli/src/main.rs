#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use manabi_server::handler;
use manabi_server::middleware::RouterExt;
use manabi_server::service::ServiceState;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Cli, ServerConfig, log_server_config};

// Tracing targets for the binary.
pub const TRACING_TARGET_SERVER_STARTUP: &str = "manabi_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "manabi_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "manabi_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "server stopped cleanly"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "server stopped with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Parses arguments, wires up state and serves until shutdown.
async fn run() -> anyhow::Result<()> {
    #[cfg(feature = "dotenv")]
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing();
    log_startup_info();
    log_server_config(&cli.server);

    cli.server
        .validate()
        .context("invalid server configuration")?;
    cli.service
        .validate()
        .context("invalid service configuration")?;

    let state = ServiceState::from_config(&cli.service)
        .await
        .context("failed to create service state")?;
    let router = create_router(state, &cli.server);

    server::serve(router, cli.server).await
}

/// Assembles the router and its middleware.
///
/// Layers added later wrap the earlier ones, so requests pass through
/// timeout, then observability, then CORS before reaching the handlers.
fn create_router(state: ServiceState, server_config: &ServerConfig) -> Router {
    handler::routes()
        .with_state(state)
        .with_cors()
        .with_observability()
        .with_timeout(server_config.request_timeout())
}

/// Installs the fmt subscriber, filtered by `RUST_LOG` with an `info`
/// fallback.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Announces the version and host details at startup.
fn log_startup_info() {
    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting manabi server"
    );

    tracing::debug!(
        target: TRACING_TARGET_SERVER_STARTUP,
        pid = process::id(),
        arch = std::env::consts::ARCH,
        os = std::env::consts::OS,
        "host details"
    );
}
