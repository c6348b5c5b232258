//! Cloudflare AI Gateway Configuration

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use super::models::ModelNormalizer;
use crate::error::GatewayError;

/// Default gateway base URL (without account or gateway segments)
pub const DEFAULT_BASE_URL: &str = "https://gateway.ai.cloudflare.com/v1";

/// Configuration for the Cloudflare AI Gateway provider
#[derive(Clone)]
pub struct CloudflareGatewayConfig {
    /// Cloudflare account identifier
    pub account_id: String,
    /// AI Gateway identifier within the account
    pub gateway_id: String,
    /// Gateway token, sent as `cf-aig-authorization: Bearer <token>`
    pub token: SecretString,
    /// Model used when a request names none
    pub default_model: Option<String>,
    pub base_url: String,
    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
    pub normalizer: ModelNormalizer,
}

impl std::fmt::Debug for CloudflareGatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareGatewayConfig")
            .field("account_id", &self.account_id)
            .field("gateway_id", &self.gateway_id)
            .field("has_token", &!self.token.expose_secret().is_empty())
            .field("default_model", &self.default_model)
            .field("base_url", &self.base_url)
            .field("headers", &self.headers.len())
            .finish()
    }
}

impl Default for CloudflareGatewayConfig {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            gateway_id: String::new(),
            token: SecretString::from(String::new()),
            default_model: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            headers: HashMap::new(),
            normalizer: ModelNormalizer::default(),
        }
    }
}

impl CloudflareGatewayConfig {
    pub fn new(
        account_id: impl Into<String>,
        gateway_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            gateway_id: gateway_id.into(),
            token: SecretString::from(token.into()),
            ..Default::default()
        }
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_normalizer(mut self, normalizer: ModelNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Full URL of the OpenAI-compatible chat completions endpoint.
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/{}/{}/compat/chat/completions",
            self.base_url.trim_end_matches('/'),
            self.account_id,
            self.gateway_id
        )
    }

    /// Resolve the canonical model for a request.
    ///
    /// A blank or missing requested model falls back to the default model;
    /// either way the chosen id is normalized as given, without trimming.
    pub fn resolve_model(&self, requested: Option<&str>) -> Result<String, GatewayError> {
        let model = requested
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                self.default_model
                    .as_deref()
                    .filter(|m| !m.trim().is_empty())
            })
            .ok_or_else(|| {
                GatewayError::ConfigurationError(
                    "No model specified and no default model configured".to_string(),
                )
            })?;
        Ok(self.normalizer.normalize(model))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.account_id.trim().is_empty() {
            return Err(GatewayError::ConfigurationError(
                "Account ID cannot be empty".to_string(),
            ));
        }

        if self.gateway_id.trim().is_empty() {
            return Err(GatewayError::ConfigurationError(
                "Gateway ID cannot be empty".to_string(),
            ));
        }

        if self.token.expose_secret().is_empty() {
            return Err(GatewayError::ConfigurationError(
                "Gateway token cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GatewayError::ConfigurationError(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}
