use async_trait::async_trait;

use crate::domain::text::errors::TextGenerationError;
use crate::domain::text::model::GeneratedText;

pub struct GenerateTextParams {
    pub prompt: String,
}

#[async_trait]
pub trait GenerateTextUseCase: Send + Sync {
    async fn execute(&self, params: GenerateTextParams)
    -> Result<GeneratedText, TextGenerationError>;
}
