//! Integration tests for `GeminiClient` using wiremock HTTP mocks.

use aivis_genai::{GeminiClient, GeminiSettings, GenAiError, Schema, TextGenerator};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";

fn test_client(base_url: &str) -> GeminiClient {
    GeminiClient::new(GeminiSettings {
        api_key: "test-key".to_string(),
        model: "gemini-test".to_string(),
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
        user_agent: "aivis-test/0.1".to_string(),
    })
    .expect("client construction should not fail")
}

fn candidate_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn generate_content_returns_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate_body(r#"{"mentions":3}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let text = client
        .generate_content("estimate", None)
        .await
        .expect("should return text");

    assert_eq!(text, r#"{"mentions":3}"#);
}

#[tokio::test]
async fn request_carries_prompt_and_response_schema() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "analyze Acme" }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": { "mentions": { "type": "INTEGER" } },
                    "required": ["mentions"]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let schema = Schema::object([("mentions", Schema::integer())]);
    let text = client
        .generate("analyze Acme", Some(&schema))
        .await
        .expect("schema request should match");
    assert_eq!(text, "{}");
}

#[tokio::test]
async fn non_success_status_surfaces_service_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "API key not valid.", "status": "PERMISSION_DENIED" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate_content("x", None).await.unwrap_err();

    match err {
        GenAiError::Status { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key not valid.");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate_content("x", None).await.unwrap_err();

    assert!(
        matches!(err, GenAiError::EmptyResponse { ref finish_reason } if finish_reason == "SAFETY"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn malformed_envelope_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate_content("x", None).await.unwrap_err();

    assert!(matches!(err, GenAiError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    let client = test_client("http://127.0.0.1:1");
    let err = client.generate_content("x", None).await.unwrap_err();
    assert!(matches!(err, GenAiError::Http(_)), "got {err:?}");
}
