//! cloudflare-ai-gateway
//!
//! Chat completions through Cloudflare AI Gateway's OpenAI-compatible endpoint.
//!
//! The crate canonicalizes caller-facing model identifiers into the gateway's
//! `<vendor>/<model>` scheme, sends a single authenticated POST per call and
//! maps the reply into a [`CompletionResult`] or a [`GatewayError`].
#![deny(unsafe_code)]

pub mod error;
pub mod providers;
pub mod traits;
pub mod types;

pub use error::GatewayError;
pub use providers::cloudflare::{
    CloudflareGatewayBuilder, CloudflareGatewayConfig, GatewayProvider, ModelNormalizer,
};
pub use traits::CompletionProvider;
pub use types::{ChatMessage, CompletionRequest, CompletionResult, MessageRole, Usage};

/// Commonly used items
pub mod prelude {
    pub use crate::error::GatewayError;
    pub use crate::providers::cloudflare::models;
    pub use crate::providers::cloudflare::{
        CloudflareGatewayBuilder, CloudflareGatewayConfig, GatewayProvider, ModelNormalizer,
    };
    pub use crate::traits::CompletionProvider;
    pub use crate::types::{ChatMessage, CompletionRequest, CompletionResult, MessageRole, Usage};
}
