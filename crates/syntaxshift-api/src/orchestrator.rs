// ABOUTME: Maps a requested operation to component calls and assembles the
// ABOUTME: response envelope; every downstream failure becomes a soft result.
use serde::{Deserialize, Serialize};
use syntaxshift_ai::ModelGateway;
use syntaxshift_analyzer as analyzer;
use syntaxshift_core::{
    ComplexityReport, Language, Operation, Result, ShiftError, SyntaxFact, TransformResult,
};
use syntaxshift_rewrite as rewrite;
use tracing::info;

fn default_source_language() -> String {
    "python".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransformRequest {
    pub code: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default)]
    pub target_language: Option<String>,
    pub operation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransformResponse {
    pub original_code: String,
    pub transformed_code: String,
    pub explanations: Vec<String>,
    pub suggestions: Vec<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl TransformResponse {
    fn failure(code: &str, message: String) -> Self {
        Self {
            original_code: code.to_string(),
            transformed_code: code.to_string(),
            explanations: Vec::new(),
            suggestions: Vec::new(),
            success: false,
            error_message: Some(message),
        }
    }
}

/// Per-request dispatch over the rewriter, the analyzer and the gateway.
///
/// Stateless across requests; the gateway is the only held component.
pub struct Orchestrator {
    gateway: ModelGateway,
}

impl Orchestrator {
    pub fn new(gateway: ModelGateway) -> Self {
        Self { gateway }
    }

    /// Run one request through to a response envelope. Downstream failures
    /// never escape: they populate `success=false` with the code unchanged.
    pub async fn handle(&self, request: TransformRequest) -> TransformResponse {
        match self.dispatch(&request).await {
            Ok(response) => response,
            Err(e) => TransformResponse::failure(&request.code, e.to_string()),
        }
    }

    async fn dispatch(&self, request: &TransformRequest) -> Result<TransformResponse> {
        let operation: Operation = request.operation.parse()?;
        let language = request.source_language.as_str();

        let mut explanations = Vec::new();
        let mut suggestions = Vec::new();
        let mut transformed = request.code.clone();

        info!(operation = ?operation, language, "Handling transform request");

        match operation {
            Operation::Optimize => {
                let result = self.optimize(&request.code, language).await;
                transformed = result.output_code;
                suggestions = result.notes;
            }
            Operation::Transform => {
                let result = self.transform(&request.code, language).await;
                transformed = result.output_code;
                suggestions = result.notes;
            }
            Operation::Convert => {
                let target = request
                    .target_language
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .ok_or_else(|| {
                        ShiftError::MissingParameter(
                            "Target language required for conversion".to_string(),
                        )
                    })?;
                let result = self.convert(&request.code, language, target).await?;
                transformed = result.output_code;
                suggestions = result.notes;
            }
            Operation::Explain => {
                explanations = self.explain(&request.code, language).await;
            }
        }

        if transformed.trim() != request.code.trim() {
            explanations.extend(
                self.explain_changes(&request.code, &transformed, language)
                    .await,
            );
        }

        Ok(TransformResponse {
            original_code: request.code.clone(),
            transformed_code: transformed,
            explanations,
            suggestions,
            success: true,
            error_message: None,
        })
    }

    /// Optimize for performance and readability.
    pub async fn optimize(&self, code: &str, language: &str) -> TransformResult {
        if language.eq_ignore_ascii_case("python") {
            self.optimize_python(code).await
        } else {
            self.gateway.optimize(code, language).await
        }
    }

    async fn optimize_python(&self, code: &str) -> TransformResult {
        // Unparseable source skips the rule passes and goes straight to the
        // generic refinement prompt
        if !analyzer::is_valid_python(code) {
            return self.gateway.optimize(code, "python").await;
        }

        let mut notes = Vec::new();
        let mut current = code.to_string();

        if let Some(rewritten) = rewrite::rewrite_range_len(&current) {
            current = rewritten;
            notes.push(
                "Replaced range(len()) with enumerate for better performance".to_string(),
            );
        }

        let (rewritten, collapsed) = rewrite::rewrite_append_loops(&current);
        current = rewritten;
        for _ in 0..collapsed {
            notes.push("Converted loop to list comprehension for better performance".to_string());
        }

        let refined = self.gateway.optimize_python(&current).await;
        notes.extend(refined.notes);
        TransformResult::with_notes(refined.output_code, notes)
    }

    /// Apply structural cleanups (DRY, clean structure).
    pub async fn transform(&self, code: &str, language: &str) -> TransformResult {
        if !language.eq_ignore_ascii_case("python") {
            return self.gateway.transform(code, language).await;
        }

        let mut notes = rewrite::duplicate_lines(code);

        let dry = self.gateway.apply_dry(code).await;
        notes.extend(dry.notes);

        let refined = self.gateway.transform_python(&dry.output_code).await;
        notes.extend(refined.notes);
        TransformResult::with_notes(refined.output_code, notes)
    }

    /// Convert between languages. Both ends must be registered; the
    /// Python/JavaScript pair runs the rule-based rewriter first.
    pub async fn convert(&self, code: &str, source: &str, target: &str) -> Result<TransformResult> {
        let source: Language = source.parse()?;
        let target: Language = target.parse()?;

        if let Some(roughed) = rewrite::rewrite(code, source, target) {
            return Ok(self.gateway.improve_conversion(&roughed, source, target).await);
        }

        let mut notes = conversion_caveats(source, target);
        let converted = self.gateway.convert(code, source, target).await;
        notes.extend(converted.notes);
        Ok(TransformResult::with_notes(converted.output_code, notes))
    }

    /// Explain what the code does, combining local facts with the gateway.
    pub async fn explain(&self, code: &str, language: &str) -> Vec<String> {
        let mut explanations = Vec::new();

        if language.eq_ignore_ascii_case("python") {
            match analyzer::analyze(code) {
                Ok(facts) => explanations.extend(facts.iter().map(SyntaxFact::describe)),
                Err(_) => explanations
                    .push("Code has syntax errors that prevent detailed analysis".to_string()),
            }
            explanations.extend(analyzer::scan_advisories(code));
        }

        explanations.extend(self.gateway.explain(code, language).await);
        explanations
    }

    /// Explain what changed between two versions of the code.
    pub async fn explain_changes(
        &self,
        original: &str,
        modified: &str,
        language: &str,
    ) -> Vec<String> {
        if original.trim() == modified.trim() {
            return vec!["No changes were made to the code.".to_string()];
        }
        self.gateway.explain_changes(original, modified, language).await
    }

    /// Coarse complexity report: local analysis for Python, gateway
    /// assessment for everything else.
    pub async fn complexity(&self, code: &str, language: &str) -> ComplexityReport {
        if language.eq_ignore_ascii_case("python") {
            return analyzer::complexity(code);
        }

        let (level, _notes) = self.gateway.assess_complexity(code, language).await;
        ComplexityReport {
            level,
            ..ComplexityReport::unknown(code)
        }
    }

    /// Learning tips: construct-keyed local tips for Python plus generated
    /// ones for any language.
    pub async fn learning_tips(&self, code: &str, language: &str) -> Vec<String> {
        let mut tips = Vec::new();
        if language.eq_ignore_ascii_case("python") {
            tips.extend(analyzer::local_tips(code));
        }
        tips.extend(self.gateway.learning_tips(code, language).await);
        tips
    }
}

fn conversion_caveats(source: Language, target: Language) -> Vec<String> {
    match (source, target) {
        (Language::Python, Language::Cpp) => vec![
            "C++ requires explicit type declarations".to_string(),
            "Memory management may need to be handled manually".to_string(),
            "Added necessary #include statements".to_string(),
        ],
        (Language::Python, Language::Java) => vec![
            "Java requires class structure and public static void main".to_string(),
            "Variable types need to be explicitly declared".to_string(),
            "Python's dynamic features may not translate directly".to_string(),
        ],
        _ => Vec::new(),
    }
}
