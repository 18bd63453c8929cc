use async_trait::async_trait;

/// Result type for completion-service calls
pub type ClientResult<T> = anyhow::Result<T>;

/// Sampling configuration for a single completion request
#[derive(Debug, Clone)]
pub struct SamplingParams {
    /// Temperature for sampling (0.0 to 2.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_completion_tokens: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_completion_tokens: 1024,
        }
    }
}

/// A remote text-completion service.
///
/// The gateway holds this behind `Arc<dyn CompletionClient>` so tests can
/// substitute a scripted fake for the real HTTP client.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submit a prompt and return the raw completion text.
    async fn complete(&self, prompt: &str, params: &SamplingParams) -> ClientResult<String>;

    /// Model identifier used for generation
    fn model_name(&self) -> &str;
}
