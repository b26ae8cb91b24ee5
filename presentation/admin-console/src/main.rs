use dotenvy::dotenv;

use admin_console::config::app_config::AppConfig;
use admin_console::setup::{dependency_injection::DependencyContainer, runner::Runner};

/// Admin Console Entry Point
///
/// Loads configuration, wires the HTTP gateways into the stores and runs a
/// headless console session against the catalog API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.api)?;

    // 5. Run the console session
    Runner::run(config, container).await?;

    Ok(())
}
