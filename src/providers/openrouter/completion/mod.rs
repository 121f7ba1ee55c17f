//! OpenRouter completion language model (`/completions`)

mod prompt;

use super::body::{insert_opt, merge_object};
use super::chat::effective_usage;
use super::config::{OpenRouterConfig, PROVIDER_ID};
use super::response::{check_error_payload, first_choice, parse_usage, provider_metadata};
use super::settings::OpenRouterCompletionSettings;
use crate::error::LlmError;
use crate::traits::LanguageModelV3;
use crate::types::{
    CallWarning, FinishReason, GenerateResult, LanguageModelCallOptions, ResponseMetadata,
};
use async_trait::async_trait;
use prompt::convert_to_completion_prompt;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::Instrument;

#[derive(Clone)]
pub struct OpenRouterCompletionLanguageModel {
    model_id: String,
    settings: OpenRouterCompletionSettings,
    config: Arc<OpenRouterConfig>,
}

impl OpenRouterCompletionLanguageModel {
    pub(crate) fn new(
        model_id: impl Into<String>,
        settings: OpenRouterCompletionSettings,
        config: Arc<OpenRouterConfig>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            settings,
            config,
        }
    }

    pub fn settings(&self) -> &OpenRouterCompletionSettings {
        &self.settings
    }

    /// Build the request body without sending it.
    pub fn build_request_body(
        &self,
        options: &LanguageModelCallOptions,
    ) -> Result<(Value, Vec<CallWarning>), LlmError> {
        let s = &self.settings;
        let mut warnings = Vec::new();

        if !options.tools.is_empty() {
            warnings.push(CallWarning::UnsupportedSetting {
                setting: "tools".into(),
                details: None,
            });
        }
        if options.top_k.is_some() {
            warnings.push(CallWarning::UnsupportedSetting {
                setting: "top_k".into(),
                details: None,
            });
        }
        if options.response_format.is_some() {
            warnings.push(CallWarning::UnsupportedSetting {
                setting: "response_format".into(),
                details: Some("JSON response format is not supported.".into()),
            });
        }

        let converted = convert_to_completion_prompt(&options.prompt)?;
        let mut stop = options.stop_sequences.clone().unwrap_or_default();
        stop.extend(converted.stop_sequences);

        let mut body = Map::new();
        body.insert("model".into(), json!(self.model_id));
        insert_opt(&mut body, "models", s.models.as_ref())?;
        insert_opt(&mut body, "logit_bias", s.logit_bias.as_ref())?;
        insert_opt(&mut body, "logprobs", s.logprobs)?;
        insert_opt(&mut body, "suffix", s.suffix.as_ref())?;
        insert_opt(&mut body, "echo", s.echo)?;
        insert_opt(&mut body, "user", s.user.as_ref())?;

        insert_opt(&mut body, "max_tokens", options.max_output_tokens)?;
        insert_opt(&mut body, "temperature", options.temperature)?;
        insert_opt(&mut body, "top_p", options.top_p)?;
        insert_opt(&mut body, "frequency_penalty", options.frequency_penalty)?;
        insert_opt(&mut body, "presence_penalty", options.presence_penalty)?;
        insert_opt(&mut body, "seed", options.seed)?;
        if !stop.is_empty() {
            body.insert("stop".into(), json!(stop));
        }

        body.insert("prompt".into(), json!(converted.prompt));
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

#[async_trait]
impl LanguageModelV3 for OpenRouterCompletionLanguageModel {
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
        let span = tracing::debug_span!("openrouter.completion", model = %self.model_id);
        async move {
            let (body, warnings) = self.build_request_body(&options)?;
            for w in &warnings {
                tracing::debug!(warning = ?w, "call option ignored");
            }
            let resp = self
                .config
                .post_json("/completions", &options.headers, body.clone())
                .await?;

            check_error_payload(&resp.body)?;
            let choice = first_choice(&resp.body)?;

            Ok(GenerateResult {
                text: choice.get("text").and_then(Value::as_str).map(str::to_string),
                reasoning: choice
                    .get("reasoning")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                tool_calls: Vec::new(),
                finish_reason: FinishReason::from_openai(
                    choice.get("finish_reason").and_then(Value::as_str),
                ),
                usage: parse_usage(&resp.body)?.unwrap_or_default().to_usage(),
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

impl std::fmt::Debug for OpenRouterCompletionLanguageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterCompletionLanguageModel")
            .field("model_id", &self.model_id)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
