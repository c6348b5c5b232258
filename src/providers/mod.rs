//! Provider implementations.

pub mod cloudflare;
