//! HTTP-level tests for the OpenRouter provider against a mock server

use jouster_llm::{CompletionRequest, LlmError, LlmProvider, OpenRouterConfig, OpenRouterProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer, api_key: Option<&str>) -> OpenRouterProvider {
    let config = OpenRouterConfig {
        endpoint: format!("{}/api/v1/chat/completions", server.uri()),
        model: "test/model".to_string(),
        timeout_secs: Some(5),
    };
    OpenRouterProvider::new(config, api_key.map(str::to_string)).unwrap()
}

#[tokio::test]
async fn test_successful_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("authorization", "Bearer secret-key"))
        .and(body_partial_json(json!({
            "model": "test/model",
            "messages": [{"role": "user", "content": "Analyze this"}],
            "max_tokens": 128
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gen-1",
            "choices": [{"message": {"role": "assistant", "content": "{\"summary\": \"ok\"}"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, Some("secret-key"));
    let request = CompletionRequest::user("Analyze this").with_max_tokens(128);

    let reply = provider.complete(request).await.unwrap();
    assert_eq!(reply, r#"{"summary": "ok"}"#);
}

#[tokio::test]
async fn test_non_success_status_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, Some("secret-key"));
    let result = provider.complete(CompletionRequest::user("x")).await;

    match result {
        Err(LlmError::Status { status, body, .. }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
    // MockServer verifies `expect(1)` on drop
}

#[tokio::test]
async fn test_unauthorized_without_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "No auth"})))
        .mount(&server)
        .await;

    let provider = provider_for(&server, None);
    let err = provider
        .complete(CompletionRequest::user("x"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "OpenRouter API error: 401");
}

#[tokio::test]
async fn test_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let provider = provider_for(&server, Some("k"));
    let err = provider
        .complete(CompletionRequest::user("x"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Empty response from OpenRouter API");
}
