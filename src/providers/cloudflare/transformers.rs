//! Request/response transformers for the gateway compat endpoint.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::types::{ChatMessage, CompletionRequest, CompletionResult, Usage};

/// Wire body for `POST .../compat/chat/completions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayChatRequest<'a> {
    pub model: String,
    pub messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl<'a> GatewayChatRequest<'a> {
    /// Build the wire body from a request and its already-canonical model id.
    pub fn from_request(model: String, request: &'a CompletionRequest) -> Self {
        Self {
            model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct GatewayChatResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<GatewayChoice>,
    usage: GatewayUsage,
}

#[derive(Debug, Clone, Deserialize)]
struct GatewayChoice {
    message: GatewayMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GatewayMessage {
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GatewayUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Extract the first choice's content and usage from a success body.
pub fn parse_chat_response(body: &str) -> Result<CompletionResult, GatewayError> {
    let response: GatewayChatResponse = serde_json::from_str(body)?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::ParseError("Response contained no choices".to_string()))?;
    let content = choice.message.content.ok_or_else(|| {
        GatewayError::ParseError("First choice has no message content".to_string())
    })?;

    Ok(CompletionResult {
        content,
        usage: Usage::new(
            response.usage.prompt_tokens,
            response.usage.completion_tokens,
            response.usage.total_tokens,
        ),
        model: response.model,
        finish_reason: choice.finish_reason,
    })
}

/// Map a non-success HTTP response to the provider error condition.
pub fn classify_http_error(status: u16, body: String) -> GatewayError {
    // Limit body sample size to avoid noisy logs
    let body_sample = body.chars().take(200).collect::<String>();
    tracing::warn!(
        provider = "cloudflare",
        status,
        body_sample = %body_sample,
        "gateway returned non-success status"
    );
    GatewayError::ProviderError { status, body }
}
