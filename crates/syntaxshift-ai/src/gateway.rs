// ABOUTME: Builds prompts, invokes the completion service and decodes replies.
// ABOUTME: Every operation fails soft: original code plus a diagnostic note.
use crate::client::{CompletionClient, SamplingParams};
use crate::groq::GroqClient;
use crate::prompts;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use syntaxshift_core::{ComplexityLevel, GatewayConfig, Language, TransformResult};
use tracing::warn;

/// Gateway to the remote completion service.
///
/// Decoding is strict serde over the returned JSON text; the payload comes
/// from a third-party service and must never reach any code-evaluation
/// mechanism. Missing code fields default to the original input, missing
/// note fields to an empty list.
pub struct ModelGateway {
    client: Arc<dyn CompletionClient>,
    config: GatewayConfig,
}

impl ModelGateway {
    pub fn new(client: Arc<dyn CompletionClient>, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    /// Build a gateway backed by the real Groq client.
    pub fn from_config(config: GatewayConfig) -> Result<Self> {
        let client = GroqClient::new(config.clone())?;
        Ok(Self::new(Arc::new(client), config))
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    fn params(&self, temperature: f32, max_completion_tokens: usize) -> SamplingParams {
        SamplingParams {
            temperature: self.config.temperature.unwrap_or(temperature),
            max_completion_tokens: self
                .config
                .max_completion_tokens
                .unwrap_or(max_completion_tokens),
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        prompt: &str,
        params: SamplingParams,
    ) -> Result<T> {
        let payload = self.client.complete(prompt, &params).await?;
        decode(&payload).context("Completion service returned a malformed payload")
    }

    pub async fn convert(&self, code: &str, source: Language, target: Language) -> TransformResult {
        let prompt = prompts::convert(code, source.as_str(), target.as_str());
        match self
            .request::<ConvertReply>(&prompt, self.params(0.2, 1024))
            .await
        {
            Ok(reply) => {
                let mut notes = reply.conversion_notes;
                notes.extend(reply.language_differences);
                TransformResult::with_notes(
                    reply.converted_code.unwrap_or_else(|| code.to_string()),
                    notes,
                )
            }
            Err(e) => soft_failure(code, format!("AI conversion failed: {}", e)),
        }
    }

    /// Refine code that the rule-based rewriter already roughed out.
    pub async fn improve_conversion(
        &self,
        base_code: &str,
        source: Language,
        target: Language,
    ) -> TransformResult {
        let prompt = prompts::improve_conversion(base_code, source.as_str(), target.as_str());
        match self
            .request::<ImproveReply>(&prompt, self.params(0.2, 1024))
            .await
        {
            Ok(reply) => {
                let mut notes = reply.improvements;
                notes.extend(reply.syntax_fixes);
                TransformResult::with_notes(
                    reply.improved_code.unwrap_or_else(|| base_code.to_string()),
                    notes,
                )
            }
            Err(e) => soft_failure(base_code, format!("AI improvement failed: {}", e)),
        }
    }

    pub async fn optimize(&self, code: &str, language: &str) -> TransformResult {
        let prompt = prompts::optimize(code, language);
        self.optimize_with(code, prompt).await
    }

    pub async fn optimize_python(&self, code: &str) -> TransformResult {
        let prompt = prompts::optimize_python(code);
        self.optimize_with(code, prompt).await
    }

    async fn optimize_with(&self, code: &str, prompt: String) -> TransformResult {
        match self
            .request::<OptimizeReply>(&prompt, self.params(0.3, 1024))
            .await
        {
            Ok(reply) => TransformResult::with_notes(
                reply.optimized_code.unwrap_or_else(|| code.to_string()),
                reply.improvements,
            ),
            Err(e) => soft_failure(code, format!("AI optimization failed: {}", e)),
        }
    }

    pub async fn transform(&self, code: &str, language: &str) -> TransformResult {
        let prompt = prompts::transform(code, language);
        self.transform_with(code, prompt).await
    }

    pub async fn transform_python(&self, code: &str) -> TransformResult {
        let prompt = prompts::transform_python(code);
        self.transform_with(code, prompt).await
    }

    async fn transform_with(&self, code: &str, prompt: String) -> TransformResult {
        match self
            .request::<TransformReply>(&prompt, self.params(0.3, 1024))
            .await
        {
            Ok(reply) => TransformResult::with_notes(
                reply.transformed_code.unwrap_or_else(|| code.to_string()),
                reply.changes,
            ),
            Err(e) => soft_failure(code, format!("AI transformation failed: {}", e)),
        }
    }

    pub async fn apply_dry(&self, code: &str) -> TransformResult {
        let prompt = prompts::apply_dry(code);
        match self
            .request::<DryReply>(&prompt, self.params(0.3, 1024))
            .await
        {
            Ok(reply) => TransformResult::with_notes(
                reply.refactored_code.unwrap_or_else(|| code.to_string()),
                reply.extractions,
            ),
            Err(e) => soft_failure(code, format!("DRY refactoring failed: {}", e)),
        }
    }

    pub async fn explain(&self, code: &str, language: &str) -> Vec<String> {
        let prompt = prompts::explain(code, language);
        match self
            .request::<ExplainReply>(&prompt, self.params(0.4, 1024))
            .await
        {
            Ok(reply) => {
                let mut explanations = reply.explanations;
                if let Some(purpose) = reply.purpose.filter(|p| !p.is_empty()) {
                    explanations.insert(0, format!("Purpose: {}", purpose));
                }
                if !reply.key_concepts.is_empty() {
                    explanations.push(format!("Key concepts: {}", reply.key_concepts.join(", ")));
                }
                explanations
            }
            Err(e) => vec![format!("Could not generate AI explanation: {}", e)],
        }
    }

    pub async fn explain_changes(
        &self,
        original: &str,
        modified: &str,
        language: &str,
    ) -> Vec<String> {
        let prompt = prompts::explain_changes(original, modified, language);
        match self
            .request::<ChangesReply>(&prompt, self.params(0.3, 1024))
            .await
        {
            Ok(reply) => {
                let mut explanations = reply.changes;
                explanations.extend(reply.benefits);
                explanations.extend(reply.impact);
                explanations
            }
            Err(e) => vec![format!("Could not explain changes: {}", e)],
        }
    }

    pub async fn assess_complexity(
        &self,
        code: &str,
        language: &str,
    ) -> (ComplexityLevel, Vec<String>) {
        let prompt = prompts::assess_complexity(code, language);
        match self
            .request::<ComplexityReply>(&prompt, self.params(0.3, 512))
            .await
        {
            Ok(reply) => {
                let level = reply
                    .complexity_level
                    .parse()
                    .unwrap_or(ComplexityLevel::Unknown);
                let mut notes = Vec::new();
                if !reply.analysis.is_empty() {
                    notes.push(reply.analysis);
                }
                notes.extend(reply.suggestions);
                (level, notes)
            }
            Err(e) => {
                warn!("Complexity assessment failed: {}", e);
                (ComplexityLevel::Unknown, vec![
                    "Could not analyze complexity".to_string(),
                ])
            }
        }
    }

    pub async fn learning_tips(&self, code: &str, language: &str) -> Vec<String> {
        let prompt = prompts::learning_tips(code, language);
        match self
            .request::<TipsReply>(&prompt, self.params(0.5, 512))
            .await
        {
            Ok(reply) => reply.tips,
            Err(e) => {
                warn!("Tip generation failed: {}", e);
                vec!["Keep practicing and experimenting with code".to_string()]
            }
        }
    }
}

fn soft_failure(code: &str, note: String) -> TransformResult {
    warn!("{}", note);
    TransformResult::with_notes(code, vec![note])
}

/// Strict JSON decode of a service payload.
///
/// Strips a surrounding markdown fence when present; anything else malformed
/// is a decode failure. Never evaluates the payload.
fn decode<T: DeserializeOwned>(payload: &str) -> serde_json::Result<T> {
    serde_json::from_str(strip_fences(payload))
}

fn strip_fences(payload: &str) -> &str {
    let trimmed = payload.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .strip_suffix("```")
        .map(str::trim_end)
        .unwrap_or(trimmed)
}

// Reply shapes for each prompt template. Fields the service omits fall back
// to the defaults; code fields are re-filled with the original input upstream.

#[derive(Debug, Default, Deserialize)]
struct ConvertReply {
    #[serde(default)]
    converted_code: Option<String>,
    #[serde(default)]
    conversion_notes: Vec<String>,
    #[serde(default)]
    language_differences: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ImproveReply {
    #[serde(default)]
    improved_code: Option<String>,
    #[serde(default)]
    improvements: Vec<String>,
    #[serde(default)]
    syntax_fixes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OptimizeReply {
    #[serde(default)]
    optimized_code: Option<String>,
    #[serde(default)]
    improvements: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TransformReply {
    #[serde(default)]
    transformed_code: Option<String>,
    #[serde(default)]
    changes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DryReply {
    #[serde(default)]
    refactored_code: Option<String>,
    #[serde(default)]
    extractions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ExplainReply {
    #[serde(default)]
    explanations: Vec<String>,
    #[serde(default)]
    purpose: Option<String>,
    #[serde(default)]
    key_concepts: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChangesReply {
    #[serde(default)]
    changes: Vec<String>,
    #[serde(default)]
    benefits: Vec<String>,
    #[serde(default)]
    impact: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ComplexityReply {
    #[serde(default)]
    complexity_level: String,
    #[serde(default)]
    analysis: String,
    #[serde(default)]
    suggestions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TipsReply {
    #[serde(default)]
    tips: Vec<String>,
}
