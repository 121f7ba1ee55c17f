//! OpenRouter provider
//!
//! OpenRouter exposes many upstream model vendors behind one
//! OpenAI-style REST API. This module provides:
//!
//! - [`OpenRouterProvider`]: factory for chat, completion and embedding models
//! - [`OpenRouterChatLanguageModel`] (`/chat/completions`)
//! - [`OpenRouterCompletionLanguageModel`] (`/completions`)
//! - [`OpenRouterEmbeddingModel`] (`/embeddings`), which normalizes the
//!   vector encodings different upstreams return
//!
//! # Example
//! ```rust,ignore
//! use siumai_provider_openrouter::prelude::*;
//!
//! let provider = OpenRouterProvider::builder().api_key("sk-or-...").build()?;
//! let model = provider.text_embedding_model("openai/text-embedding-3-small", Default::default());
//! let result = model.do_embed(EmbedOptions::new(["sunny day at the beach"])).await?;
//! ```

mod body;
pub mod builder;
pub mod chat;
pub mod completion;
pub mod config;
pub mod embedding;
pub mod provider;
mod response;
pub mod settings;

pub use builder::OpenRouterBuilder;
pub use chat::OpenRouterChatLanguageModel;
pub use completion::OpenRouterCompletionLanguageModel;
pub use config::{
    API_KEY_ENV, DEFAULT_BASE_URL, OpenRouterConfig, OpenRouterProviderSettings, PROVIDER_ID,
};
pub use embedding::{OpenRouterEmbeddingModel, RawEmbedding, VectorError};
pub use provider::{
    COMPLETION_MODEL_ID, OpenRouterLanguageModel, OpenRouterProvider, create_openrouter,
    create_openrouter_with_env, openrouter,
};
pub use settings::{
    Compatibility, LanguageModelSettings, OpenRouterChatSettings, OpenRouterCompletionSettings,
    OpenRouterEmbeddingSettings, ProviderRouting, ReasoningConfig, UsageConfig,
};
