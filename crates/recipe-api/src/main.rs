//! Recipe API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p recipe-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use recipe_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Pick the log format before reporting any configuration problem
    let env = config.as_ref().map(|c| c.app.env).unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = recipe_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
