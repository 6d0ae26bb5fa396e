use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema, SimpleObject};

use business::domain::text::model::GeneratedText;
use business::domain::text::use_cases::generate::{GenerateTextParams, GenerateTextUseCase};

use crate::api::graphql::error_mapper::IntoGraphQLError;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Typed resolver context, built once at startup and shared by every request.
#[derive(Clone)]
pub struct GraphQLContext {
    pub generate_text: Arc<dyn GenerateTextUseCase>,
}

pub fn create_schema(context: GraphQLContext) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(context)
        .finish()
}

/// Envelope returned by `generateText`.
#[derive(Debug, Clone, SimpleObject)]
pub struct TextResponse {
    pub text: String,
}

impl From<GeneratedText> for TextResponse {
    fn from(generated: GeneratedText) -> Self {
        Self {
            text: generated.text,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hello(&self) -> Option<String> {
        Some("Hello from GraphQL!".to_string())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Sends `prompt` to the completion model and returns the first answer.
    async fn generate_text(
        &self,
        ctx: &Context<'_>,
        prompt: String,
    ) -> async_graphql::Result<TextResponse> {
        let context = ctx.data::<GraphQLContext>()?;

        context
            .generate_text
            .execute(GenerateTextParams { prompt })
            .await
            .map(TextResponse::from)
            .map_err(IntoGraphQLError::into_graphql_error)
    }
}
