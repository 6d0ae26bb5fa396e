use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, deepseek_config::DeepSeekConfig};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// GlyphScript API Entry Point
///
/// Loads configuration, wires the DeepSeek adapter into the GraphQL schema,
/// and starts the HTTP server.
///
/// - config/: Environment-driven configuration (server, CORS, GraphQL, DeepSeek)
/// - setup/: Dependency injection and server/middleware setup
/// - api/: Info route, GraphQL schema and endpoint, CORS and error middleware
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG may come from .env too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    let deepseek_config = DeepSeekConfig::from_env()?;
    tracing::info!(?deepseek_config, "Loaded DeepSeek configuration");

    // 4. Wire dependencies
    let container = DependencyContainer::new(deepseek_config, &config.graphql);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
