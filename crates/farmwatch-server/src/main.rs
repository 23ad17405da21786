//! Farmwatch Server - Main entry point

use anyhow::Result;
use farmwatch_common::logging::{init_logging, LogConfig};
use tracing::info;

use farmwatch_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("farmwatch-server")
        .filter_directives("farmwatch_server=debug,tower_http=debug,sqlx=warn")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    info!("Starting Farmwatch Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}",
        config.bind_address()
    );

    api::serve(config).await
}
