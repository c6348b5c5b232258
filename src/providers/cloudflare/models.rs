//! Cloudflare AI Gateway Model Identifiers
//!
//! The gateway's compat endpoint routes on `<vendor>/<model>` identifiers whose
//! vendor segment does not always match the name callers use elsewhere
//! (`xai` is `grok`, `google` is `google-ai-studio`, ...). Some vendors also
//! spell version numbers with hyphens where callers usually write dots.
//!
//! [`ModelNormalizer`] rewrites caller-facing identifiers into the gateway form.

use std::collections::{HashMap, HashSet};

/// Built-in vendor aliases: caller prefix -> gateway prefix.
pub const VENDOR_ALIASES: &[(&str, &str)] = &[
    ("xai", "grok"),
    ("workersai", "workers-ai"),
    ("google", "google-ai-studio"),
    ("perplexity", "perplexity-ai"),
];

/// Gateway vendors whose model names use `-` between version digits.
pub const VERSION_DASH_VENDORS: &[&str] = &["anthropic"];

/// Rewrites model identifiers into the gateway's canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelNormalizer {
    aliases: HashMap<String, String>,
    version_dash_vendors: HashSet<String>,
}

impl Default for ModelNormalizer {
    fn default() -> Self {
        Self {
            aliases: VENDOR_ALIASES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            version_dash_vendors: VERSION_DASH_VENDORS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl ModelNormalizer {
    /// Normalizer with the built-in rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer with no rules at all (identity).
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
            version_dash_vendors: HashSet::new(),
        }
    }

    /// Add or replace a vendor alias.
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aliases.insert(from.into(), to.into());
        self
    }

    /// Flag a gateway vendor for version-separator rewriting.
    pub fn with_version_dash_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.version_dash_vendors.insert(vendor.into());
        self
    }

    /// Canonical gateway prefix for a vendor, if it is aliased.
    pub fn alias_for(&self, vendor: &str) -> Option<&str> {
        self.aliases.get(vendor).map(String::as_str)
    }

    /// Produce the gateway-canonical form of `model`.
    ///
    /// Identifiers without a `/` are returned unchanged. Only the segment before
    /// the first `/` is subject to aliasing; the remainder is kept as-is apart
    /// from version-separator rewriting for flagged vendors.
    pub fn normalize(&self, model: &str) -> String {
        let Some((prefix, rest)) = model.split_once('/') else {
            return model.to_string();
        };

        let vendor = self.alias_for(prefix).unwrap_or(prefix);
        if self.version_dash_vendors.contains(vendor) {
            format!("{vendor}/{}", dash_version_separators(rest))
        } else {
            format!("{vendor}/{rest}")
        }
    }
}

/// Replace every `.` that sits between two ASCII digits with `-`.
///
/// Neighbours are checked against the input, so `3.5.1` becomes `3-5-1`.
pub fn dash_version_separators(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    for (i, ch) in input.char_indices() {
        let between_digits = ch == '.'
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        out.push(if between_digits { '-' } else { ch });
    }
    out
}

/// Anthropic models, gateway spelling
pub mod anthropic {
    pub const CLAUDE_SONNET_4_5: &str = "anthropic/claude-sonnet-4-5";
    pub const CLAUDE_OPUS_4_1: &str = "anthropic/claude-opus-4-1";
    pub const CLAUDE_HAIKU_4_5: &str = "anthropic/claude-haiku-4-5";

    pub const ALL: &[&str] = &[CLAUDE_SONNET_4_5, CLAUDE_OPUS_4_1, CLAUDE_HAIKU_4_5];
}

/// OpenAI models
pub mod openai {
    pub const GPT_4O: &str = "openai/gpt-4o";
    pub const GPT_4O_MINI: &str = "openai/gpt-4o-mini";
    pub const GPT_4_1: &str = "openai/gpt-4.1";

    pub const ALL: &[&str] = &[GPT_4O, GPT_4O_MINI, GPT_4_1];
}

/// Google AI Studio models
pub mod google {
    pub const GEMINI_2_5_PRO: &str = "google-ai-studio/gemini-2.5-pro";
    pub const GEMINI_2_5_FLASH: &str = "google-ai-studio/gemini-2.5-flash";

    pub const ALL: &[&str] = &[GEMINI_2_5_PRO, GEMINI_2_5_FLASH];
}

/// xAI models (routed as `grok`)
pub mod xai {
    pub const GROK_4_1_FAST_REASONING: &str = "grok/grok-4.1-fast-reasoning";
    pub const GROK_4: &str = "grok/grok-4";

    pub const ALL: &[&str] = &[GROK_4_1_FAST_REASONING, GROK_4];
}

/// Workers AI models
pub mod workers_ai {
    pub const LLAMA_3_1_8B_INSTRUCT: &str = "workers-ai/@cf/meta/llama-3.1-8b-instruct";
    pub const LLAMA_3_3_70B_INSTRUCT_FP8_FAST: &str =
        "workers-ai/@cf/meta/llama-3.3-70b-instruct-fp8-fast";

    pub const ALL: &[&str] = &[LLAMA_3_1_8B_INSTRUCT, LLAMA_3_3_70B_INSTRUCT_FP8_FAST];
}

/// Every catalogued model id
pub fn all_models() -> Vec<String> {
    [
        anthropic::ALL,
        openai::ALL,
        google::ALL,
        xai::ALL,
        workers_ai::ALL,
    ]
    .concat()
    .into_iter()
    .map(str::to_string)
    .collect()
}
