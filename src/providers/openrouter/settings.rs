//! OpenRouter model settings
//!
//! Settings are fixed when a model is created. Per-call overrides go through
//! `LanguageModelCallOptions::provider_options["openrouter"]`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How strictly requests follow the OpenRouter API.
///
/// `Strict` targets openrouter.ai itself and asks for usage accounting on
/// every language-model call. `Compatible` targets third-party gateways
/// speaking the same protocol and only sends fields the caller set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Strict,
    #[default]
    Compatible,
}

/// Upstream provider routing preferences (`provider` in the request body).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderRouting {
    /// Upstream providers to try, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_fallbacks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_parameters: Option<bool>,
    /// `"allow"` or `"deny"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantizations: Option<Vec<String>>,
    /// `"price"`, `"throughput"` or `"latency"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ProviderRouting {
    pub fn order<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = Some(providers.into_iter().map(Into::into).collect());
        self
    }

    pub fn allow_fallbacks(mut self, allow: bool) -> Self {
        self.allow_fallbacks = Some(allow);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// Reasoning token configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReasoningConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// `"high"`, `"medium"` or `"low"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
}

/// Usage accounting request (`usage` in the request body).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageConfig {
    pub include: bool,
}

/// Chat model settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenRouterChatSettings {
    /// Fallback model ids
    pub models: Option<Vec<String>>,
    pub logit_bias: Option<HashMap<String, f64>>,
    /// `Some(n)` requests log probabilities with `n` top alternatives; `0`
    /// requests them without alternatives.
    pub logprobs: Option<u32>,
    pub parallel_tool_calls: Option<bool>,
    pub user: Option<String>,
    pub include_reasoning: Option<bool>,
    pub reasoning: Option<ReasoningConfig>,
    pub usage: Option<UsageConfig>,
    pub provider: Option<ProviderRouting>,
    /// Merged into the request body after provider-level extra body
    pub extra_body: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Completion model settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenRouterCompletionSettings {
    pub models: Option<Vec<String>>,
    pub logit_bias: Option<HashMap<String, f64>>,
    pub logprobs: Option<u32>,
    pub suffix: Option<String>,
    pub echo: Option<bool>,
    pub user: Option<String>,
    pub include_reasoning: Option<bool>,
    pub reasoning: Option<ReasoningConfig>,
    pub usage: Option<UsageConfig>,
    pub provider: Option<ProviderRouting>,
    pub extra_body: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Settings accepted by [`super::OpenRouterProvider::language_model`], which
/// may produce either model kind.
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageModelSettings {
    Chat(OpenRouterChatSettings),
    Completion(OpenRouterCompletionSettings),
}

impl Default for LanguageModelSettings {
    fn default() -> Self {
        Self::Chat(OpenRouterChatSettings::default())
    }
}

impl LanguageModelSettings {
    /// Chat settings; completion-only fields are dropped.
    pub fn into_chat(self) -> OpenRouterChatSettings {
        match self {
            Self::Chat(s) => s,
            Self::Completion(c) => OpenRouterChatSettings {
                models: c.models,
                logit_bias: c.logit_bias,
                logprobs: c.logprobs,
                parallel_tool_calls: None,
                user: c.user,
                include_reasoning: c.include_reasoning,
                reasoning: c.reasoning,
                usage: c.usage,
                provider: c.provider,
                extra_body: c.extra_body,
            },
        }
    }

    /// Completion settings; chat-only fields are dropped.
    pub fn into_completion(self) -> OpenRouterCompletionSettings {
        match self {
            Self::Completion(c) => c,
            Self::Chat(s) => OpenRouterCompletionSettings {
                models: s.models,
                logit_bias: s.logit_bias,
                logprobs: s.logprobs,
                suffix: None,
                echo: None,
                user: s.user,
                include_reasoning: s.include_reasoning,
                reasoning: s.reasoning,
                usage: s.usage,
                provider: s.provider,
                extra_body: s.extra_body,
            },
        }
    }
}

impl From<OpenRouterChatSettings> for LanguageModelSettings {
    fn from(s: OpenRouterChatSettings) -> Self {
        Self::Chat(s)
    }
}

impl From<OpenRouterCompletionSettings> for LanguageModelSettings {
    fn from(s: OpenRouterCompletionSettings) -> Self {
        Self::Completion(s)
    }
}

/// Embedding model settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenRouterEmbeddingSettings {
    /// End-user identifier forwarded as `user`
    pub user: Option<String>,
    pub provider: Option<ProviderRouting>,
    pub extra_body: Option<serde_json::Map<String, serde_json::Value>>,
}
