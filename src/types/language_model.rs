//! Language model call types (chat and completion)
//!
//! These are the provider-agnostic request and result shapes. Provider
//! modules translate them to and from vendor payloads.

use super::provider_options::{ProviderMetadata, ProviderOptionsMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Tool,
}

/// One part of a message body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text {
        text: String,
    },
    /// Image by URL; `data:` URLs are passed through unchanged.
    Image {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
    /// Model reasoning carried on assistant turns.
    Reasoning {
        text: String,
    },
    /// A tool invocation emitted by the model on an assistant turn.
    ToolCall {
        id: String,
        name: String,
        /// JSON-encoded arguments, as produced by the model
        arguments: String,
    },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self::Image {
            url: url.into(),
            media_type: None,
        }
    }
}

/// A single prompt message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: Vec<ContentPart>,
    /// Tool call id; only meaningful on `Tool` messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    fn text_message(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![ContentPart::text(text)],
            tool_call_id: None,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::text_message(MessageRole::System, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::text_message(MessageRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::text_message(MessageRole::Assistant, text)
    }

    pub fn tool(tool_call_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tool_call_id: Some(tool_call_id.into()),
            ..Self::text_message(MessageRole::Tool, text)
        }
    }

    /// User message with arbitrary parts (e.g. text + image).
    pub fn user_with_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: MessageRole::User,
            content: parts,
            tool_call_id: None,
        }
    }

    /// Concatenated text of all `Text` parts.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|p| match p {
                ContentPart::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Requested response format.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFormat {
    Text,
    Json {
        schema: Option<serde_json::Value>,
        name: Option<String>,
        description: Option<String>,
    },
}

/// A function tool offered to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionTool {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: serde_json::Value,
}

/// Options for a single `do_generate` call.
#[derive(Debug, Clone, Default)]
pub struct LanguageModelCallOptions {
    pub prompt: Vec<ChatMessage>,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
    pub frequency_penalty: Option<f64>,
    pub presence_penalty: Option<f64>,
    pub stop_sequences: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub response_format: Option<ResponseFormat>,
    pub tools: Vec<FunctionTool>,
    /// Provider-keyed pass-through fields merged into the request body.
    pub provider_options: ProviderOptionsMap,
    /// Per-call HTTP headers (override provider headers)
    pub headers: HashMap<String, String>,
}

impl LanguageModelCallOptions {
    pub fn new(prompt: Vec<ChatMessage>) -> Self {
        Self {
            prompt,
            ..Default::default()
        }
    }

    pub fn with_provider_option(
        mut self,
        provider_id: impl AsRef<str>,
        value: serde_json::Value,
    ) -> Self {
        self.provider_options.insert(provider_id, value);
        self
    }
}

/// Why generation stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    Error,
    Other(String),
    Unknown,
}

impl FinishReason {
    /// Map an OpenAI-style finish reason string.
    pub fn from_openai(raw: Option<&str>) -> Self {
        match raw {
            Some("stop") => Self::Stop,
            Some("length") => Self::Length,
            Some("content_filter") => Self::ContentFilter,
            Some("function_call") | Some("tool_calls") => Self::ToolCalls,
            Some("error") => Self::Error,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Unknown,
        }
    }
}

/// Token usage for a language model call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageModelUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
    pub reasoning_tokens: Option<u64>,
    pub cached_input_tokens: Option<u64>,
}

/// Non-fatal notice about the call, e.g. an ignored setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallWarning {
    UnsupportedSetting {
        setting: String,
        details: Option<String>,
    },
    Other {
        message: String,
    },
}

/// Response identification data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMetadata {
    pub id: Option<String>,
    pub model_id: Option<String>,
    pub headers: HashMap<String, String>,
}

/// A tool call returned by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

/// Result of a non-streaming generation call.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub text: Option<String>,
    pub reasoning: Option<String>,
    pub tool_calls: Vec<ToolCall>,
    pub finish_reason: FinishReason,
    pub usage: LanguageModelUsage,
    pub provider_metadata: Option<ProviderMetadata>,
    pub warnings: Vec<CallWarning>,
    /// Exact request body sent to the vendor
    pub request_body: serde_json::Value,
    pub response: ResponseMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reason_mapping() {
        assert_eq!(FinishReason::from_openai(Some("stop")), FinishReason::Stop);
        assert_eq!(
            FinishReason::from_openai(Some("tool_calls")),
            FinishReason::ToolCalls
        );
        assert_eq!(
            FinishReason::from_openai(Some("function_call")),
            FinishReason::ToolCalls
        );
        assert_eq!(
            FinishReason::from_openai(Some("weird")),
            FinishReason::Other("weird".into())
        );
        assert_eq!(FinishReason::from_openai(None), FinishReason::Unknown);
    }

    #[test]
    fn message_text_skips_non_text_parts() {
        let msg = ChatMessage::user_with_parts(vec![
            ContentPart::text("look at "),
            ContentPart::image_url("https://example.com/cat.png"),
            ContentPart::text("this"),
        ]);
        assert_eq!(msg.text(), "look at this");
    }
}
