//! Taskboard stub backend -- in-memory REST server.
//!
//! Serves the task board API (`/projects`, `/tasks`) from process memory
//! so the client can be developed and tested without a real backend.
//! All state is lost on shutdown.
//!
//! # Usage
//!
//! ```bash
//! # Run on default address 127.0.0.1:3000
//! cargo run --bin taskboard-stub
//!
//! # Run on custom address
//! cargo run --bin taskboard-stub -- --bind 127.0.0.1:8080
//!
//! # Or via environment variable
//! TASKBOARD_STUB_ADDR=127.0.0.1:8080 cargo run --bin taskboard-stub
//! ```

use std::sync::Arc;

use clap::Parser;
use taskboard_stub::config::{StubCliArgs, StubConfig};
use taskboard_stub::server;
use taskboard_stub::state::BoardState;

#[tokio::main]
async fn main() {
    let cli = StubCliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match StubConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(addr = %config.bind_addr, "starting taskboard stub server");

    let state = Arc::new(BoardState::new());

    match server::start_server_with_state(&config.bind_addr, state).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "stub server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "stub server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start stub server");
            std::process::exit(1);
        }
    }
}
