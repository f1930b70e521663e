use crate::config::GeneratorOptions;
use crate::error::{LocatorError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// External text-generation capability.
///
/// The returned text is passed through untouched.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

const SYSTEM_PROMPT: &str = "You generate Selenium WebDriver automation scripts.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LocatorError::GenerationFailed("Response contained no message content".to_string()))
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    options: GeneratorOptions,
}

impl OpenAiGenerator {
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| LocatorError::GenerationFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, options })
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.options.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.2,
        };

        let mut request = self.client.post(&self.options.endpoint).json(&body);
        if let Some(api_key) = &self.options.api_key {
            request = request.bearer_auth(api_key);
        }

        log::debug!("requesting script from {} ({})", self.options.endpoint, self.options.model);

        let response = request
            .send()
            .await
            .map_err(|e| LocatorError::GenerationFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::warn!("generation service returned {}: {}", status, detail);
            return Err(LocatorError::GenerationFailed(format!(
                "Service returned {}: {}",
                status, detail
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LocatorError::GenerationFailed(format!("Malformed response: {}", e)))?;

        parsed.into_text()
    }
}
