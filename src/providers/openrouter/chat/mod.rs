//! OpenRouter chat language model (`/chat/completions`)

mod messages;

pub(crate) use messages::convert_to_openrouter_chat_messages;

use super::body::{insert_opt, merge_object};
use super::config::{OpenRouterConfig, PROVIDER_ID};
use super::response::{check_error_payload, first_choice, parse_usage, provider_metadata};
use super::settings::{Compatibility, OpenRouterChatSettings, UsageConfig};
use crate::error::{LlmError, ValidationIssue};
use crate::traits::LanguageModelV3;
use crate::types::{
    CallWarning, FinishReason, GenerateResult, LanguageModelCallOptions, ResponseFormat,
    ResponseMetadata, ToolCall,
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::Instrument;

#[derive(Clone)]
pub struct OpenRouterChatLanguageModel {
    model_id: String,
    settings: OpenRouterChatSettings,
    config: Arc<OpenRouterConfig>,
}

impl OpenRouterChatLanguageModel {
    pub(crate) fn new(
        model_id: impl Into<String>,
        settings: OpenRouterChatSettings,
        config: Arc<OpenRouterConfig>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            settings,
            config,
        }
    }

    pub fn settings(&self) -> &OpenRouterChatSettings {
        &self.settings
    }

    /// Build the request body without sending it.
    pub fn build_request_body(
        &self,
        options: &LanguageModelCallOptions,
    ) -> Result<(Value, Vec<CallWarning>), LlmError> {
        let s = &self.settings;
        let warnings = Vec::new();
        let mut body = Map::new();

        body.insert("model".into(), json!(self.model_id));
        insert_opt(&mut body, "models", s.models.as_ref())?;
        insert_opt(&mut body, "logit_bias", s.logit_bias.as_ref())?;
        if let Some(n) = s.logprobs {
            body.insert("logprobs".into(), json!(true));
            if n > 0 {
                body.insert("top_logprobs".into(), json!(n));
            }
        }
        insert_opt(&mut body, "user", s.user.as_ref())?;
        insert_opt(&mut body, "parallel_tool_calls", s.parallel_tool_calls)?;

        insert_opt(&mut body, "max_tokens", options.max_output_tokens)?;
        insert_opt(&mut body, "temperature", options.temperature)?;
        insert_opt(&mut body, "top_p", options.top_p)?;
        insert_opt(&mut body, "top_k", options.top_k)?;
        insert_opt(&mut body, "frequency_penalty", options.frequency_penalty)?;
        insert_opt(&mut body, "presence_penalty", options.presence_penalty)?;
        insert_opt(&mut body, "seed", options.seed)?;
        insert_opt(&mut body, "stop", options.stop_sequences.as_ref())?;
        insert_opt(
            &mut body,
            "response_format",
            options.response_format.as_ref().and_then(response_format_json),
        )?;

        if !options.tools.is_empty() {
            let tools: Vec<Value> = options
                .tools
                .iter()
                .map(|t| {
                    let mut function = json!({"name": t.name, "parameters": t.parameters});
                    if let Some(d) = &t.description {
                        function["description"] = json!(d);
                    }
                    json!({"type": "function", "function": function})
                })
                .collect();
            body.insert("tools".into(), Value::Array(tools));
        }

        body.insert(
            "messages".into(),
            Value::Array(convert_to_openrouter_chat_messages(&options.prompt)?),
        );
        insert_opt(&mut body, "include_reasoning", s.include_reasoning)?;
        insert_opt(&mut body, "reasoning", s.reasoning.as_ref())?;
        insert_opt(
            &mut body,
            "usage",
            effective_usage(self.config.compatibility(), s.usage),
        )?;
        insert_opt(&mut body, "provider", s.provider.as_ref())?;

        merge_object(&mut body, self.config.extra_body());
        if let Some(extra) = &s.extra_body {
            merge_object(&mut body, extra);
        }
        if let Some(call) = options.provider_options.get_object(PROVIDER_ID) {
            merge_object(&mut body, call);
        }
        body.insert("stream".into(), json!(false));

        Ok((Value::Object(body), warnings))
    }
}

/// Strict mode always asks for usage accounting unless the settings say otherwise.
pub(crate) fn effective_usage(
    compatibility: Compatibility,
    configured: Option<UsageConfig>,
) -> Option<UsageConfig> {
    match (compatibility, configured) {
        (_, Some(u)) => Some(u),
        (Compatibility::Strict, None) => Some(UsageConfig { include: true }),
        (Compatibility::Compatible, None) => None,
    }
}

fn response_format_json(format: &ResponseFormat) -> Option<Value> {
    match format {
        ResponseFormat::Text => None,
        ResponseFormat::Json { schema: None, .. } => Some(json!({"type": "json_object"})),
        ResponseFormat::Json {
            schema: Some(schema),
            name,
            description,
        } => {
            let mut js = json!({
                "schema": schema,
                "strict": true,
                "name": name.as_deref().unwrap_or("response"),
            });
            if let Some(d) = description {
                js["description"] = json!(d);
            }
            Some(json!({"type": "json_schema", "json_schema": js}))
        }
    }
}

fn parse_tool_calls(message: &Value) -> Result<Vec<ToolCall>, LlmError> {
    let Some(calls) = message.get("tool_calls").filter(|v| !v.is_null()) else {
        return Ok(Vec::new());
    };
    let calls = calls.as_array().ok_or_else(|| {
        LlmError::validation(
            "choices[0].message.tool_calls",
            ValidationIssue::WrongType,
            "expected an array",
        )
    })?;
    calls
        .iter()
        .enumerate()
        .map(|(i, call)| {
            let path = format!("choices[0].message.tool_calls[{i}]");
            let name = call
                .pointer("/function/name")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    LlmError::validation(
                        format!("{path}.function.name"),
                        ValidationIssue::MissingField,
                        "tool call without a function name",
                    )
                })?;
            Ok(ToolCall {
                id: call
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                name: name.to_string(),
                arguments: call
                    .pointer("/function/arguments")
                    .and_then(Value::as_str)
                    .unwrap_or("{}")
                    .to_string(),
            })
        })
        .collect()
}

#[async_trait]
impl LanguageModelV3 for OpenRouterChatLanguageModel {
    fn provider(&self) -> &str {
        PROVIDER_ID
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn do_generate(
        &self,
        options: LanguageModelCallOptions,
    ) -> Result<GenerateResult, LlmError> {
        let span = tracing::debug_span!("openrouter.chat", model = %self.model_id);
        async move {
            let (body, warnings) = self.build_request_body(&options)?;
            let resp = self
                .config
                .post_json("/chat/completions", &options.headers, body.clone())
                .await?;

            check_error_payload(&resp.body)?;
            let choice = first_choice(&resp.body)?;
            let message = choice.get("message").ok_or_else(|| {
                LlmError::validation(
                    "choices[0].message",
                    ValidationIssue::MissingField,
                    "choice without a message",
                )
            })?;

            let usage = parse_usage(&resp.body)?.unwrap_or_default().to_usage();
            let text = message.get("content").and_then(Value::as_str).map(str::to_string);
            let reasoning = message
                .get("reasoning")
                .and_then(Value::as_str)
                .map(str::to_string);
            let tool_calls = parse_tool_calls(message)?;

            Ok(GenerateResult {
                text,
                reasoning,
                tool_calls,
                finish_reason: FinishReason::from_openai(
                    choice.get("finish_reason").and_then(Value::as_str),
                ),
                usage,
                provider_metadata: provider_metadata(&resp.body),
                warnings,
                request_body: body,
                response: ResponseMetadata {
                    id: resp.body.get("id").and_then(Value::as_str).map(str::to_string),
                    model_id: resp
                        .body
                        .get("model")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    headers: resp.headers,
                },
            })
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for OpenRouterChatLanguageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterChatLanguageModel")
            .field("model_id", &self.model_id)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_mode_defaults_usage_accounting_on() {
        assert_eq!(
            effective_usage(Compatibility::Strict, None),
            Some(UsageConfig { include: true })
        );
        assert_eq!(effective_usage(Compatibility::Compatible, None), None);
        assert_eq!(
            effective_usage(Compatibility::Strict, Some(UsageConfig { include: false })),
            Some(UsageConfig { include: false })
        );
    }

    #[test]
    fn json_response_format() {
        assert_eq!(
            response_format_json(&ResponseFormat::Json {
                schema: None,
                name: None,
                description: None
            }),
            Some(json!({"type": "json_object"}))
        );
        let with_schema = response_format_json(&ResponseFormat::Json {
            schema: Some(json!({"type": "object"})),
            name: Some("answer".into()),
            description: None,
        })
        .unwrap();
        assert_eq!(with_schema["json_schema"]["name"], "answer");
        assert!(response_format_json(&ResponseFormat::Text).is_none());
    }

    #[test]
    fn tool_calls_are_parsed() {
        let msg = json!({"tool_calls": [{
            "id": "call_1",
            "type": "function",
            "function": {"name": "weather", "arguments": "{\"city\":\"Paris\"}"}
        }]});
        let calls = parse_tool_calls(&msg).unwrap();
        assert_eq!(calls[0].name, "weather");
        assert_eq!(calls[0].arguments, "{\"city\":\"Paris\"}");
    }
}
