use super::env::parse_or;

/// GraphQL endpoint settings.
///
/// Environment variables:
/// - GRAPHIQL_ENABLED: serve the GraphiQL IDE to browsers on GET /graphql (default: true)
#[derive(Debug, Clone)]
pub struct GraphQLConfig {
    pub graphiql_enabled: bool,
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            graphiql_enabled: true,
        }
    }
}

impl GraphQLConfig {
    pub fn from_lookup<F>(lookup: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            graphiql_enabled: parse_or(lookup, "GRAPHIQL_ENABLED", true)?,
        })
    }
}
