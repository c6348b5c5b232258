//! Capability traits.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::types::{ChatMessage, CompletionRequest, CompletionResult};

/// Chat completion capability.
///
/// Implementations issue exactly one upstream call per invocation and keep no
/// mutable state between calls, so a single instance can be shared freely.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider identifier
    fn provider_id(&self) -> &'static str;

    /// Run a completion request.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResult, GatewayError>;

    /// Convenience wrapper using the provider's default model.
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<CompletionResult, GatewayError> {
        self.complete(CompletionRequest::new(messages)).await
    }
}
