use super::cors_config::CorsConfig;
use super::env::{parse_or, process_env};
use super::graphql_config::GraphQLConfig;
use super::server_config::ServerConfig;

/// HTTP-facing configuration, loaded once at startup.
///
/// Environment variables (besides those of the nested configs):
/// - EXPOSE_ERROR_DETAILS: include the failure message in 500 bodies (default: true)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub graphql: GraphQLConfig,
    pub expose_error_details: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup<F>(lookup: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            cors: CorsConfig::from_lookup(lookup)?,
            graphql: GraphQLConfig::from_lookup(lookup)?,
            expose_error_details: parse_or(lookup, "EXPOSE_ERROR_DETAILS", true)?,
        })
    }
}
