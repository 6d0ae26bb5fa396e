use async_graphql::ErrorExtensions;

use business::domain::text::errors::TextGenerationError;

/// The only message clients ever see for a failed generation.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate text from DeepSeek";

pub trait IntoGraphQLError {
    fn into_graphql_error(self) -> async_graphql::Error;
}

impl IntoGraphQLError for TextGenerationError {
    fn into_graphql_error(self) -> async_graphql::Error {
        // Kind and detail stay server-side.
        async_graphql::Error::new(GENERATION_FAILED_MESSAGE)
            .extend_with(|_, extensions| extensions.set("code", "INTERNAL_SERVER_ERROR"))
    }
}
