pub mod app_config;
pub mod cors_config;
pub mod deepseek_config;
pub mod env;
pub mod graphql_config;
pub mod server_config;
