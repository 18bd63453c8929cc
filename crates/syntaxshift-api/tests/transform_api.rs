use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use syntaxshift_ai::{ClientResult, CompletionClient, ModelGateway, SamplingParams};
use syntaxshift_api::{create_router, AppState, Orchestrator};
use syntaxshift_core::{ComplexityLevel, GatewayConfig};

/// Scripted stand-in for the remote completion service.
struct FakeClient {
    payload: Option<String>,
}

impl FakeClient {
    fn replying(payload: &str) -> Arc<Self> {
        Arc::new(Self {
            payload: Some(payload.to_string()),
        })
    }

    fn timing_out() -> Arc<Self> {
        Arc::new(Self { payload: None })
    }
}

#[async_trait]
impl CompletionClient for FakeClient {
    async fn complete(&self, _prompt: &str, _params: &SamplingParams) -> ClientResult<String> {
        match &self.payload {
            Some(payload) => Ok(payload.clone()),
            None => Err(anyhow::anyhow!("request timed out")),
        }
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

fn orchestrator(client: Arc<FakeClient>) -> Orchestrator {
    let config = GatewayConfig {
        api_key: "test-key".into(),
        ..Default::default()
    };
    Orchestrator::new(ModelGateway::new(client, config))
}

fn test_server(client: Arc<FakeClient>) -> TestServer {
    let state = AppState::with_orchestrator(orchestrator(client));
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let server = test_server(FakeClient::replying("{}"));
    let response = server.get("/api/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Syntax Shift API");
}

#[tokio::test]
async fn languages_endpoint_lists_registry() {
    let server = test_server(FakeClient::replying("{}"));
    let response = server.get("/api/languages").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["supported_languages"],
        json!(["python", "javascript", "cpp", "java"])
    );
    assert_eq!(body["default_language"], "python");
}

#[tokio::test]
async fn gateway_timeout_degrades_to_original_code() {
    let server = test_server(FakeClient::timing_out());
    let response = server
        .post("/api/transform")
        .json(&json!({"code": "x = 1", "operation": "optimize"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["transformed_code"], "x = 1");
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions[0].as_str().unwrap().contains("failed"));
}

#[tokio::test]
async fn convert_requires_target_language() {
    let server = test_server(FakeClient::replying("{}"));
    let response = server
        .post("/api/transform")
        .json(&json!({"code": "print(1)", "operation": "convert"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error_message"]
        .as_str()
        .unwrap()
        .contains("Target language required"));
    assert_eq!(body["transformed_code"], "print(1)");
}

#[tokio::test]
async fn convert_rejects_unregistered_language() {
    let server = test_server(FakeClient::replying("{}"));
    let response = server
        .post("/api/transform")
        .json(&json!({
            "code": "print(1)",
            "operation": "convert",
            "target_language": "haskell"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error_message"]
        .as_str()
        .unwrap()
        .contains("Unsupported language: haskell"));
    // No mutation on rejection
    assert_eq!(body["transformed_code"], "print(1)");
}

#[tokio::test]
async fn unknown_operation_is_a_soft_failure() {
    let server = test_server(FakeClient::replying("{}"));
    let response = server
        .post("/api/transform")
        .json(&json!({"code": "x = 1", "operation": "frobnicate"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["transformed_code"], "x = 1");
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let server = test_server(FakeClient::replying("{}"));
    let response = server
        .post("/api/transform")
        .json(&json!({"operation": "optimize"}))
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn python_to_javascript_runs_rules_then_refinement() {
    let payload = r#"{
        "improved_code": "console.log(\"hi\");",
        "improvements": ["tidied output"],
        "syntax_fixes": [],
        "changes": ["swapped print for console.log"]
    }"#;
    let server = test_server(FakeClient::replying(payload));
    let response = server
        .post("/api/transform")
        .json(&json!({
            "code": "print(\"hi\")",
            "operation": "convert",
            "source_language": "python",
            "target_language": "javascript"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["transformed_code"], "console.log(\"hi\");");
    assert_eq!(body["suggestions"], json!(["tidied output"]));
    // Output differs from input, so the change explanation flow ran too
    assert_eq!(body["explanations"], json!(["swapped print for console.log"]));
}

#[tokio::test]
async fn python_to_cpp_prepends_conversion_caveats() {
    let payload = r#"{"converted_code": "int x = 1;", "conversion_notes": ["typed"]}"#;
    let server = test_server(FakeClient::replying(payload));
    let response = server
        .post("/api/transform")
        .json(&json!({
            "code": "x = 1",
            "operation": "convert",
            "source_language": "python",
            "target_language": "cpp"
        }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["transformed_code"], "int x = 1;");
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(suggestions[0]
        .as_str()
        .unwrap()
        .contains("explicit type declarations"));
    assert!(suggestions.iter().any(|s| s.as_str().unwrap() == "typed"));
}

#[tokio::test]
async fn explain_combines_local_facts_and_gateway() {
    let payload = r#"{"explanations": ["model says"], "purpose": "demo"}"#;
    let server = test_server(FakeClient::replying(payload));
    let response = server
        .post("/api/transform")
        .json(&json!({
            "code": "def f(a, b):\n    if a:\n        return b",
            "operation": "explain"
        }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    // Explanation only; the code itself is untouched
    assert_eq!(body["transformed_code"], body["original_code"]);
    let explanations: Vec<String> = body["explanations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert!(explanations
        .iter()
        .any(|e| e.contains("Function 'f' defined with 2 parameter(s)")));
    assert!(explanations.iter().any(|e| e.contains("Conditional statement")));
    assert!(explanations.contains(&"Purpose: demo".to_string()));
    assert!(explanations.contains(&"model says".to_string()));
}

#[tokio::test]
async fn explain_falls_back_when_source_does_not_parse() {
    let server = test_server(FakeClient::timing_out());
    let response = server
        .post("/api/transform")
        .json(&json!({"code": "def broken(:", "operation": "explain"}))
        .await;
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let explanations = body["explanations"].as_array().unwrap();
    assert!(explanations[0]
        .as_str()
        .unwrap()
        .contains("syntax errors"));
}

#[tokio::test]
async fn optimize_applies_local_passes_before_refinement() {
    // Empty reply object: the refinement pass keeps whatever the rules built
    let server = test_server(FakeClient::replying("{}"));
    let response = server
        .post("/api/transform")
        .json(&json!({
            "code": "for i in range(len(items)):\n    print(items[i])",
            "operation": "optimize"
        }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["transformed_code"],
        "for i, item in enumerate(items):\n    print(items[i])"
    );
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(suggestions[0].as_str().unwrap().contains("enumerate"));
}

#[tokio::test]
async fn optimize_collapses_append_loops() {
    let server = test_server(FakeClient::replying("{}"));
    let response = server
        .post("/api/transform")
        .json(&json!({
            "code": "for x in data:\n    squares.append(x * x)",
            "operation": "optimize"
        }))
        .await;
    let body: Value = response.json();
    assert_eq!(
        body["transformed_code"],
        "squares = [x * x for x in data]"
    );
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(suggestions[0]
        .as_str()
        .unwrap()
        .contains("list comprehension"));
}

#[tokio::test]
async fn transform_reports_duplicate_lines() {
    let server = test_server(FakeClient::replying("{}"));
    let code = "result = compute(a, b)\nx = 1\nresult = compute(a, b)";
    let response = server
        .post("/api/transform")
        .json(&json!({"code": code, "operation": "transform"}))
        .await;
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["transformed_code"], code);
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(suggestions[0]
        .as_str()
        .unwrap()
        .contains("duplicate code pattern"));
}

#[tokio::test]
async fn complexity_uses_local_analysis_for_python() {
    let orch = orchestrator(FakeClient::timing_out());
    let report = orch
        .complexity("def f(a):\n    if a:\n        return a", "python")
        .await;
    assert_eq!(report.functions, 1);
    assert_eq!(report.conditionals, 1);
    assert_eq!(report.level, ComplexityLevel::Simple);
}

#[tokio::test]
async fn complexity_asks_the_gateway_for_other_languages() {
    let payload = r#"{"complexity_level": "Complex", "analysis": "deep"}"#;
    let orch = orchestrator(FakeClient::replying(payload));
    let report = orch.complexity("int main() {}", "cpp").await;
    assert_eq!(report.level, ComplexityLevel::Complex);
}

#[tokio::test]
async fn learning_tips_combine_local_and_generated() {
    let payload = r#"{"tips": ["read the docs"]}"#;
    let orch = orchestrator(FakeClient::replying(payload));
    let tips = orch
        .learning_tips("def f():\n    return 1", "python")
        .await;
    assert!(tips.iter().any(|t| t.contains("Functions help organize")));
    assert!(tips.contains(&"read the docs".to_string()));
}

#[tokio::test]
async fn no_change_explanation_is_skipped_for_identical_output() {
    // Reply echoes the input code exactly
    let payload = r#"{"optimized_code": "x = 1", "improvements": ["already optimal"]}"#;
    let server = test_server(FakeClient::replying(payload));
    let response = server
        .post("/api/transform")
        .json(&json!({"code": "x = 1", "operation": "optimize"}))
        .await;
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["explanations"], json!([]));
    assert_eq!(body["suggestions"], json!(["already optimal"]));
}
