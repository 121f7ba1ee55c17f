//! # siumai-provider-openrouter
//!
//! OpenRouter provider for siumai: chat, completion and text embedding
//! models behind the host's provider contracts ([`traits::ProviderV3`],
//! [`traits::LanguageModelV3`], [`traits::EmbeddingModelV2`]).
//!
//! ```rust,ignore
//! use siumai_provider_openrouter::prelude::*;
//!
//! let provider = OpenRouterProvider::builder()
//!     .api_key("sk-or-...")
//!     .build()?;
//!
//! let chat = provider.chat("anthropic/claude-3.5-sonnet", Default::default());
//! let result = chat
//!     .do_generate(LanguageModelCallOptions::new(vec![ChatMessage::user("Hello")]))
//!     .await?;
//! ```
#![deny(unsafe_code)]

pub mod error;
pub mod execution;
pub mod observability;
pub mod providers;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::LlmError;
pub use providers::openrouter::{
    OpenRouterBuilder, OpenRouterProvider, OpenRouterProviderSettings, create_openrouter,
    openrouter,
};

/// Crate version, used in the user-agent suffix.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::error::{LlmError, ValidationIssue};
    pub use crate::execution::http::{HttpTransport, HttpTransportRequest, HttpTransportResponse};
    pub use crate::providers::openrouter::{
        Compatibility, LanguageModelSettings, OpenRouterBuilder, OpenRouterChatLanguageModel,
        OpenRouterChatSettings, OpenRouterCompletionLanguageModel, OpenRouterCompletionSettings,
        OpenRouterEmbeddingModel, OpenRouterEmbeddingSettings, OpenRouterLanguageModel,
        OpenRouterProvider, OpenRouterProviderSettings, ProviderRouting, ReasoningConfig,
        UsageConfig, create_openrouter, openrouter,
    };
    pub use crate::traits::{EmbeddingModelV2, LanguageModelV3, ProviderV3, SpecificationVersion};
    pub use crate::types::{
        CallWarning, ChatMessage, ContentPart, EmbedOptions, EmbedResult, EmbeddingUsage,
        FinishReason, FunctionTool, GenerateResult, HttpConfig, LanguageModelCallOptions,
        LanguageModelUsage, MessageRole, ProviderMetadata, ProviderOptionsMap, ResponseFormat,
    };
}
