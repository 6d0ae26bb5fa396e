use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::text::errors::TextGenerationError;
use business::domain::text::model::GeneratedText;
use business::domain::text::services::TextGeneratorService;

use crate::client::DeepSeekClient;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

pub struct TextGeneratorDeepSeek {
    client: DeepSeekClient,
}

impl TextGeneratorDeepSeek {
    pub fn new(client: DeepSeekClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> Result<GeneratedText, TextGenerationError> {
        let parsed: CompletionResponse = serde_json::from_str(body)
            .map_err(|e| TextGenerationError::malformed_response(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TextGenerationError::malformed_response("missing choices[0]"))?;

        Ok(GeneratedText::new(choice.message.content))
    }
}

#[async_trait]
impl TextGeneratorService for TextGeneratorDeepSeek {
    async fn generate(&self, prompt: &str) -> Result<GeneratedText, TextGenerationError> {
        let body = CompletionRequest {
            model: &self.client.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .client
            .post(self.client.completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| TextGenerationError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TextGenerationError::upstream_status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TextGenerationError::transport(e.to_string()))?;

        Self::parse_response(&text)
    }
}
