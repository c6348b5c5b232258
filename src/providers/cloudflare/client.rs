//! Cloudflare AI Gateway Client

use async_trait::async_trait;
use secrecy::ExposeSecret;

use super::config::CloudflareGatewayConfig;
use super::transformers::{GatewayChatRequest, classify_http_error, parse_chat_response};
use super::utils::build_headers;
use crate::error::GatewayError;
use crate::traits::CompletionProvider;
use crate::types::{CompletionRequest, CompletionResult};

/// Provider identifier used in logs
pub const PROVIDER_ID: &str = "cloudflare";

/// Forwards chat completions to the gateway's OpenAI-compatible endpoint.
///
/// Each call normalizes the model id, sends one POST and maps the reply. The
/// provider holds only read-only configuration and a `reqwest::Client`, so it
/// can be cloned and shared across tasks.
#[derive(Clone)]
pub struct GatewayProvider {
    config: CloudflareGatewayConfig,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for GatewayProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayProvider")
            .field("account_id", &self.config.account_id)
            .field("gateway_id", &self.config.gateway_id)
            .field("default_model", &self.config.default_model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl GatewayProvider {
    /// Create a provider with a fresh HTTP client.
    pub fn new(config: CloudflareGatewayConfig) -> Result<Self, GatewayError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a provider that sends through `http_client`.
    pub fn with_http_client(
        config: CloudflareGatewayConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &CloudflareGatewayConfig {
        &self.config
    }

    /// Canonical gateway model id for `model`, falling back to the default model.
    pub fn resolve_model(&self, model: Option<&str>) -> Result<String, GatewayError> {
        let resolved = self.config.resolve_model(model)?;
        if model.is_some_and(|m| m != resolved) {
            tracing::debug!(
                provider = PROVIDER_ID,
                requested = model.unwrap_or_default(),
                canonical = %resolved,
                "rewrote model id"
            );
        }
        Ok(resolved)
    }

    /// Send a completion request. Exactly one HTTP attempt is made.
    pub async fn send(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, GatewayError> {
        let model = self.resolve_model(request.model.as_deref())?;
        let url = self.config.chat_completions_url();
        let headers = build_headers(self.config.token.expose_secret(), &self.config.headers)?;
        let body = GatewayChatRequest::from_request(model, request);

        tracing::debug!(
            provider = PROVIDER_ID,
            url = %url,
            model = %body.model,
            messages = body.messages.len(),
            "sending chat completion"
        );

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // A failed body read must not mask the status
            let body = response.text().await.unwrap_or_default();
            return Err(classify_http_error(status.as_u16(), body));
        }

        let text = response.text().await?;
        parse_chat_response(&text)
    }
}

#[async_trait]
impl CompletionProvider for GatewayProvider {
    fn provider_id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResult, GatewayError> {
        self.send(&request).await
    }
}
