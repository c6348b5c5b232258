//! Cloudflare AI Gateway Builder Implementation
//!
//! Provides a builder pattern for creating [`GatewayProvider`] instances.

use secrecy::SecretString;

use super::client::GatewayProvider;
use super::config::CloudflareGatewayConfig;
use crate::error::GatewayError;

/// Cloudflare AI Gateway builder
///
/// ```rust,ignore
/// let provider = CloudflareGatewayBuilder::new()
///     .account_id("my-account")
///     .gateway_id("my-gateway")
///     .token("gateway-token")
///     .default_model("anthropic/claude-sonnet-4.5")
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CloudflareGatewayBuilder {
    config: CloudflareGatewayConfig,
    http_client: Option<reqwest::Client>,
}

impl CloudflareGatewayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_id<S: Into<String>>(mut self, account_id: S) -> Self {
        self.config.account_id = account_id.into();
        self
    }

    pub fn gateway_id<S: Into<String>>(mut self, gateway_id: S) -> Self {
        self.config.gateway_id = gateway_id.into();
        self
    }

    /// Set the gateway token
    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.config.token = SecretString::from(token.into());
        self
    }

    /// Model used when a request does not name one
    pub fn default_model<S: Into<String>>(mut self, model: S) -> Self {
        self.config.default_model = Some(model.into());
        self
    }

    /// Override the gateway base URL (mainly for testing against a mock server)
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Add a custom header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    /// Map an additional caller vendor prefix to a gateway vendor prefix
    pub fn model_alias<F: Into<String>, T: Into<String>>(mut self, from: F, to: T) -> Self {
        self.config.normalizer = self.config.normalizer.with_alias(from, to);
        self
    }

    /// Rewrite dotted version numbers to hyphens for this gateway vendor
    pub fn version_dash_vendor<S: Into<String>>(mut self, vendor: S) -> Self {
        self.config.normalizer = self.config.normalizer.with_version_dash_vendor(vendor);
        self
    }

    /// Set custom HTTP client
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<GatewayProvider, GatewayError> {
        let http_client = self.http_client.unwrap_or_default();
        GatewayProvider::with_http_client(self.config, http_client)
    }
}
