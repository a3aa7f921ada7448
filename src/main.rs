//! Service entry point.

use anyhow::Result;
use blogr::config;
use blogr::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    let filter = EnvFilter::new(&config.log_level);
    match config.log_format.as_str() {
        "json" => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    config.print_summary();

    server::run(config).await
}
