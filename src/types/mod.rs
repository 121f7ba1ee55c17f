//! Provider-agnostic request/response types

pub mod embedding;
pub mod http;
pub mod language_model;
pub mod provider_options;

pub use embedding::{EmbedOptions, EmbedResponseInfo, EmbedResult, EmbeddingUsage};
pub use http::{HttpConfig, HttpConfigBuilder};
pub use language_model::{
    CallWarning, ChatMessage, ContentPart, FinishReason, FunctionTool, GenerateResult,
    LanguageModelCallOptions, LanguageModelUsage, MessageRole, ResponseFormat, ResponseMetadata,
    ToolCall,
};
pub use provider_options::{ProviderMetadata, ProviderOptionsMap};
