use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "meta-llama/llama-4-maverick-17b-128e-instruct";

/// Configuration for the remote completion service.
///
/// Built once at startup and injected into the gateway so tests can
/// substitute their own values (and their own client).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// API key for the completion service
    pub api_key: String,
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Optional sampling temperature override; per-operation defaults apply
    /// when unset
    pub temperature: Option<f32>,
    /// Optional output-token budget override
    pub max_completion_tokens: Option<usize>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum retries for failed requests
    pub max_retries: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
            base_url: env::var("SYNTAXSHIFT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: env::var("SYNTAXSHIFT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature: env::var("SYNTAXSHIFT_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok()),
            max_completion_tokens: env::var("SYNTAXSHIFT_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok()),
            timeout_secs: env::var("SYNTAXSHIFT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            max_retries: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: env::var("SYNTAXSHIFT_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("SYNTAXSHIFT_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}
