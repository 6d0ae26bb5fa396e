use async_trait::async_trait;

use super::errors::TextGenerationError;
use super::model::GeneratedText;

/// Service port for the upstream completion API.
#[async_trait]
pub trait TextGeneratorService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedText, TextGenerationError>;
}
