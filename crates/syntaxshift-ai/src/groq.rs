use crate::client::{ClientResult, CompletionClient, SamplingParams};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use syntaxshift_core::GatewayConfig;

/// Groq completion client (OpenAI-compatible chat-completions protocol).
pub struct GroqClient {
    config: GatewayConfig,
    client: Client,
}

impl GroqClient {
    /// Create a new Groq client
    pub fn new(config: GatewayConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(anyhow!(
                "Groq API key is required. Set GROQ_API_KEY environment variable."
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::default())
    }

    /// Send a request with retry logic
    async fn send_request(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = Duration::from_secs(2u64.pow(attempt - 1));
                tokio::time::sleep(delay).await;
            }

            match self.try_request(prompt, params).await {
                Ok(content) => return Ok(content),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.config.max_retries {
                        tracing::warn!(
                            "Completion request failed (attempt {}/{}), retrying...",
                            attempt + 1,
                            self.config.max_retries + 1
                        );
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("All retry attempts failed")))
    }

    /// Try a single chat-completions request
    async fn try_request(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        let request = ChatCompletionsRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(params.temperature),
            max_completion_tokens: Some(params.max_completion_tokens),
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to completion service")?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(anyhow!(
                "Completion service error ({}): {}",
                status,
                error_text
            ));
        }

        let completion: ChatCompletionsResponse = response
            .json()
            .await
            .context("Failed to parse completion service response")?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No choices in response"))?;

        Ok(choice.message.content)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, prompt: &str, params: &SamplingParams) -> ClientResult<String> {
        self.send_request(prompt, params).await
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// Chat Completions API request/response types

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<usize>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ChatCompletionsResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ChatChoice {
    message: ChatMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ChatUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
    total_tokens: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_requires_api_key() {
        let config = GatewayConfig {
            api_key: String::new(),
            ..Default::default()
        };
        assert!(GroqClient::new(config).is_err());
    }

    #[test]
    fn client_reports_configured_model() {
        let config = GatewayConfig {
            api_key: "test-key".into(),
            model: "test-model".into(),
            ..Default::default()
        };
        let client = GroqClient::new(config).unwrap();
        assert_eq!(client.model_name(), "test-model");
    }
}
