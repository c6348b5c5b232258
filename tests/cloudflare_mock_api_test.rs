//! Cloudflare AI Gateway Mock API Tests
//!
//! These tests verify the HTTP layer interaction with the gateway's
//! OpenAI-compatible endpoint using wiremock.

use cloudflare_ai_gateway::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const CHAT_PATH: &str = "/v1/test-account/test-gateway/compat/chat/completions";

/// Standard OpenAI-style chat completion as returned by the gateway
fn create_chat_response() -> serde_json::Value {
    json!({
        "id": "chatcmpl-9f2b",
        "object": "chat.completion",
        "created": 1730241104,
        "model": "anthropic/claude-sonnet-4-5",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": "hello"},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
    })
}

fn provider_for(server: &MockServer) -> GatewayProvider {
    CloudflareGatewayBuilder::new()
        .account_id("test-account")
        .gateway_id("test-gateway")
        .token("test-token")
        .base_url(format!("{}/v1", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_chat_success_returns_content_and_usage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("cf-aig-authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_chat_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = CompletionRequest::new(vec![ChatMessage::user("Say hello")])
        .with_model("anthropic/claude-sonnet-4.5");
    let result = provider.send(&request).await.unwrap();

    assert_eq!(result.content, "hello");
    assert_eq!(result.usage.prompt_tokens, 10);
    assert_eq!(result.usage.completion_tokens, 20);
    assert_eq!(result.usage.total_tokens, 30);
    assert_eq!(result.finish_reason.as_deref(), Some("stop"));
}

#[tokio::test]
async fn test_request_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(body_json(json!({
            "model": "google-ai-studio/gemini-2.5-pro",
            "messages": [
                {"role": "system", "content": "You are terse."},
                {"role": "user", "content": "Hi"}
            ],
            "temperature": 0.5,
            "max_tokens": 256
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_chat_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = CompletionRequest::new(vec![
        ChatMessage::system("You are terse."),
        ChatMessage::user("Hi"),
    ])
    .with_model("google/gemini-2.5-pro")
    .with_temperature(0.5)
    .with_max_tokens(256);

    provider.send(&request).await.unwrap();
}

#[tokio::test]
async fn test_default_model_is_normalized_and_optional_params_omitted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_chat_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = CloudflareGatewayBuilder::new()
        .account_id("test-account")
        .gateway_id("test-gateway")
        .token("test-token")
        .default_model("workersai/@cf/meta/llama-3.1-8b-instruct")
        .base_url(format!("{}/v1", mock_server.uri()))
        .build()
        .unwrap();

    provider.chat(vec![ChatMessage::user("Hi")]).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "workers-ai/@cf/meta/llama-3.1-8b-instruct");
    assert!(body.get("temperature").is_none());
    assert!(body.get("max_tokens").is_none());
}

#[tokio::test]
async fn test_unauthorized_is_provider_error_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "error": [{"code": 2009, "message": "Unauthorized"}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = CompletionRequest::new(vec![ChatMessage::user("Hi")]).with_model("xai/grok-4");
    let error = provider.send(&request).await.unwrap_err();

    match &error {
        GatewayError::ProviderError { status, body } => {
            assert_eq!(*status, 401);
            assert!(body.contains("Unauthorized"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "a failed call must not be retried");
}

#[tokio::test]
async fn test_server_error_is_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = CompletionRequest::new(vec![ChatMessage::user("Hi")]).with_model("openai/gpt-4o");
    let error = provider.send(&request).await.unwrap_err();

    assert!(error.is_provider_error());
    assert_eq!(error.status_code(), Some(502));
}

#[tokio::test]
async fn test_malformed_success_body_is_not_a_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = CompletionRequest::new(vec![ChatMessage::user("Hi")]).with_model("openai/gpt-4o");
    let error = provider.send(&request).await.unwrap_err();

    assert!(!error.is_provider_error());
    assert!(matches!(error, GatewayError::JsonError(_)));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_chat_response()))
        .expect(4)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let mut handles = Vec::new();
    for i in 0..4 {
        let provider = provider.clone();
        handles.push(tokio::spawn(async move {
            let request = CompletionRequest::new(vec![ChatMessage::user(format!("call {i}"))])
                .with_model("anthropic/claude-sonnet-4.5");
            provider.send(&request).await
        }));
    }

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.content, "hello");
    }
}

#[tokio::test]
async fn test_trait_object_dispatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("x-team", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_chat_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider: Box<dyn CompletionProvider> = Box::new(
        CloudflareGatewayBuilder::new()
            .account_id("test-account")
            .gateway_id("test-gateway")
            .token("test-token")
            .header("X-Team", "search")
            .base_url(format!("{}/v1", mock_server.uri()))
            .build()
            .unwrap(),
    );

    assert_eq!(provider.provider_id(), "cloudflare");
    let result = provider
        .complete(
            CompletionRequest::new(vec![ChatMessage::user("Hi")]).with_model("openai/gpt-4o"),
        )
        .await
        .unwrap();
    assert_eq!(result.usage, Usage::new(10, 20, 30));
}
