//! Error Handling Module
//!
//! A single error type covers every failure the gateway provider can surface.
//! Non-success HTTP statuses always map to [`GatewayError::ProviderError`]; the
//! remaining variants describe transport, decoding and configuration problems.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudflare_ai_gateway::error::GatewayError;
//!
//! let error = GatewayError::provider_error(401, "unauthorized");
//! assert!(error.is_provider_error());
//! assert_eq!(error.status_code(), Some(401));
//! ```

use thiserror::Error;

/// Errors produced by the gateway provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The gateway answered with a non-success HTTP status.
    #[error("Provider error (HTTP {status}): {body}")]
    ProviderError {
        /// HTTP status code returned by the gateway
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// Transport-level failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The body was not valid JSON or did not match the expected shape.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The body was valid JSON but lacked required content.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid or missing construction parameters.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GatewayError {
    /// Build a provider error from a status code and raw body.
    pub fn provider_error(status: u16, body: impl Into<String>) -> Self {
        Self::ProviderError {
            status,
            body: body.into(),
        }
    }

    /// HTTP status carried by the error, if any.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ProviderError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is the non-success-status condition.
    pub const fn is_provider_error(&self) -> bool {
        matches!(self, Self::ProviderError { .. })
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
