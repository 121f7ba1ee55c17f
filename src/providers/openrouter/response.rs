//! Response handling shared by the chat and completion models

use super::config::PROVIDER_ID;
use crate::error::{LlmError, ValidationIssue};
use crate::types::{LanguageModelUsage, ProviderMetadata};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PromptTokensDetails {
    pub cached_tokens: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CompletionTokensDetails {
    pub reasoning_tokens: Option<u64>,
}

/// `usage` object of chat and completion responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct OpenRouterUsage {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
    pub prompt_tokens_details: Option<PromptTokensDetails>,
    pub completion_tokens_details: Option<CompletionTokensDetails>,
}

impl OpenRouterUsage {
    pub(crate) fn to_usage(&self) -> LanguageModelUsage {
        LanguageModelUsage {
            input_tokens: self.prompt_tokens,
            output_tokens: self.completion_tokens,
            total_tokens: self.total_tokens.or_else(|| {
                self.prompt_tokens?.checked_add(self.completion_tokens?)
            }),
            reasoning_tokens: self
                .completion_tokens_details
                .as_ref()
                .and_then(|d| d.reasoning_tokens),
            cached_input_tokens: self
                .prompt_tokens_details
                .as_ref()
                .and_then(|d| d.cached_tokens),
        }
    }
}

/// A 200 response may still carry `{"error": {...}}`.
pub(crate) fn check_error_payload(body: &Value) -> Result<(), LlmError> {
    let Some(err) = body.get("error").filter(|e| !e.is_null()) else {
        return Ok(());
    };
    let message = err
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| err.as_str())
        .unwrap_or("Unknown error")
        .to_string();
    let code = err
        .get("code")
        .and_then(Value::as_u64)
        .and_then(|c| u16::try_from(c).ok())
        .filter(|c| (400..600).contains(c))
        .unwrap_or(500);
    Err(LlmError::api_error_with_details(code, message, body.clone()))
}

/// Parse the optional top-level `usage` object.
pub(crate) fn parse_usage(body: &Value) -> Result<Option<OpenRouterUsage>, LlmError> {
    match body.get("usage") {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => OpenRouterUsage::deserialize(raw).map(Some).map_err(|e| {
            LlmError::validation("usage", ValidationIssue::WrongType, e.to_string())
        }),
    }
}

/// `{"openrouter": {"usage": <raw usage>, "provider": <upstream>}}`, or
/// `None` when the response carries neither.
pub(crate) fn provider_metadata(body: &Value) -> Option<ProviderMetadata> {
    let mut entry = serde_json::Map::new();
    if let Some(usage) = body.get("usage").filter(|u| u.is_object()) {
        entry.insert("usage".into(), usage.clone());
    }
    if let Some(provider) = body.get("provider").and_then(Value::as_str) {
        entry.insert("provider".into(), json!(provider));
    }
    if entry.is_empty() {
        return None;
    }
    let mut metadata = ProviderMetadata::new();
    metadata.insert(PROVIDER_ID.to_string(), Value::Object(entry));
    Some(metadata)
}

/// First element of `choices`, or a validation error.
pub(crate) fn first_choice(body: &Value) -> Result<&Value, LlmError> {
    let choices = body.get("choices").ok_or_else(|| {
        LlmError::validation("choices", ValidationIssue::MissingField, "missing choices")
    })?;
    let choices = choices.as_array().ok_or_else(|| {
        LlmError::validation("choices", ValidationIssue::WrongType, "expected an array")
    })?;
    choices.first().ok_or_else(|| {
        LlmError::validation(
            "choices",
            ValidationIssue::UnexpectedValue,
            "response contained no choices",
        )
    })
}
