use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::text::errors::TextGenerationError;
use crate::domain::text::model::GeneratedText;
use crate::domain::text::services::TextGeneratorService;
use crate::domain::text::use_cases::generate::{GenerateTextParams, GenerateTextUseCase};

pub struct GenerateTextUseCaseImpl {
    pub generator: Arc<dyn TextGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateTextUseCase for GenerateTextUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateTextParams,
    ) -> Result<GeneratedText, TextGenerationError> {
        // Empty prompts are forwarded untouched; the upstream decides what they mean.
        self.logger.info(&format!(
            "Generating text for prompt of {} chars",
            params.prompt.chars().count()
        ));

        match self.generator.generate(&params.prompt).await {
            Ok(generated) => {
                self.logger.info(&format!(
                    "Generated text of {} chars",
                    generated.text.chars().count()
                ));
                Ok(generated)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Error calling DeepSeek API: {}", err));
                Err(err)
            }
        }
    }
}
