//! `blog-api` binary
//!
//! Reads configuration from the environment (and `.env` when present),
//! then serves the API, feeds and uploads until stopped.

use std::process::ExitCode;

use blog_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = try_init_tracing(&TracingConfig::default()) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.server.address(),
        "Starting blog API"
    );

    match blog_api::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server stopped with an error");
            ExitCode::FAILURE
        }
    }
}
