//! Accounts API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p accounts-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored in development).

use accounts_common::{init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    // Initialize tracing (JSON logs in production)
    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };
    init_tracing_with_config(tracing_config);

    info!("Starting Accounts API Server...");
    info!(
        env = ?config.app.env,
        address = %config.server.address(),
        "Configuration loaded"
    );

    // Run the server
    accounts_api::run(config).await?;

    Ok(())
}
