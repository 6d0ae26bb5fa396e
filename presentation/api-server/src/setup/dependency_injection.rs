use std::sync::Arc;

use business::application::text::generate::GenerateTextUseCaseImpl;
use business::domain::text::use_cases::generate::GenerateTextUseCase;
use deepseek::client::DeepSeekClient;
use deepseek::text_generator::TextGeneratorDeepSeek;
use logger::TracingLogger;

use crate::api::graphql::routes::GraphQLApi;
use crate::api::graphql::schema::{GraphQLContext, create_schema};
use crate::config::deepseek_config::DeepSeekConfig;
use crate::config::graphql_config::GraphQLConfig;

pub struct DependencyContainer {
    pub graphql_api: GraphQLApi,
}

impl DependencyContainer {
    pub fn new(deepseek_config: DeepSeekConfig, graphql_config: &GraphQLConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let deepseek_client =
            DeepSeekClient::with_timeout(deepseek_config.api_key, deepseek_config.timeout)
                .base_url(deepseek_config.base_url)
                .model(deepseek_config.model);
        let text_generator = Arc::new(TextGeneratorDeepSeek::new(deepseek_client));

        // Use cases
        let generate_text_use_case = Arc::new(GenerateTextUseCaseImpl {
            generator: text_generator,
            logger,
        });

        Self::from_use_case(generate_text_use_case, graphql_config)
    }

    pub fn from_use_case(
        generate_text: Arc<dyn GenerateTextUseCase>,
        graphql_config: &GraphQLConfig,
    ) -> Self {
        let schema = create_schema(GraphQLContext { generate_text });
        let graphql_api = GraphQLApi::new(schema, graphql_config.graphiql_enabled);

        Self { graphql_api }
    }
}
