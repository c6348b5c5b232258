//! Cloudflare AI Gateway Provider Module
//!
//! Forwards chat completions to the gateway's OpenAI-compatible endpoint
//! (`/v1/{account}/{gateway}/compat/chat/completions`).
//!
//! # Architecture
//! - `builder.rs` - Fluent builder for [`GatewayProvider`]
//! - `client.rs` - The dispatcher: one POST per call
//! - `config.rs` - Account, gateway, token and default model
//! - `models.rs` - Model id canonicalization and model constants
//! - `transformers.rs` - Wire body construction and response extraction
//! - `utils.rs` - Header construction
//!
//! # Example Usage
//! ```rust,no_run
//! use cloudflare_ai_gateway::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = CloudflareGatewayBuilder::new()
//!         .account_id("your-account-id")
//!         .gateway_id("your-gateway-id")
//!         .token("your-gateway-token")
//!         .build()?;
//!
//!     let request = CompletionRequest::new(vec![ChatMessage::user("Hello!")])
//!         .with_model("anthropic/claude-sonnet-4.5");
//!     let result = provider.send(&request).await?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod models;
pub mod transformers;
pub mod utils;

pub use builder::CloudflareGatewayBuilder;
pub use client::GatewayProvider;
pub use config::{CloudflareGatewayConfig, DEFAULT_BASE_URL};
pub use models::ModelNormalizer;
