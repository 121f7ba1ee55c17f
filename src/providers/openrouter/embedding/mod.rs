//! OpenRouter text embedding model (`/embeddings`)

pub mod schema;

pub use schema::{
    OpenRouterEmbeddingData, OpenRouterEmbeddingResponse, OpenRouterEmbeddingUsage, RawEmbedding,
    VectorError,
};

use super::body::{insert_opt, merge_object};
use super::config::{OpenRouterConfig, PROVIDER_ID};
use super::settings::OpenRouterEmbeddingSettings;
use crate::error::LlmError;
use crate::traits::EmbeddingModelV2;
use crate::types::{EmbedOptions, EmbedResponseInfo, EmbedResult, EmbeddingUsage, ProviderMetadata};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::Instrument;

#[derive(Clone)]
pub struct OpenRouterEmbeddingModel {
    model_id: String,
    settings: OpenRouterEmbeddingSettings,
    config: Arc<OpenRouterConfig>,
}

impl OpenRouterEmbeddingModel {
    pub(crate) fn new(
        model_id: impl Into<String>,
        settings: OpenRouterEmbeddingSettings,
        config: Arc<OpenRouterConfig>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            settings,
            config,
        }
    }

    pub fn settings(&self) -> &OpenRouterEmbeddingSettings {
        &self.settings
    }

    /// Extra body first, so explicit request fields always win.
    pub fn build_request_body(&self, values: &[String]) -> Result<Value, LlmError> {
        let mut body = Map::new();
        merge_object(&mut body, self.config.extra_body());
        if let Some(extra) = &self.settings.extra_body {
            merge_object(&mut body, extra);
        }
        body.insert("model".into(), json!(self.model_id));
        body.insert("input".into(), json!(values));
        insert_opt(&mut body, "user", self.settings.user.as_ref())?;
        insert_opt(&mut body, "provider", self.settings.provider.as_ref())?;
        Ok(Value::Object(body))
    }
}

fn cost_metadata(usage: Option<&OpenRouterEmbeddingUsage>) -> Option<ProviderMetadata> {
    let cost = usage?.cost?;
    let mut metadata = ProviderMetadata::new();
    metadata.insert(
        PROVIDER_ID.to_string(),
        json!({"usage": {"cost": cost}}),
    );
    Some(metadata)
}

#[async_trait]
impl EmbeddingModelV2 for OpenRouterEmbeddingModel {
    fn provider(&self) -> &str {
        PROVIDER_ID
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn do_embed(&self, options: EmbedOptions) -> Result<EmbedResult, LlmError> {
        let span = tracing::debug_span!(
            "openrouter.embed",
            model = %self.model_id,
            inputs = options.values.len()
        );
        async move {
            let body = self.build_request_body(&options.values)?;
            let resp = self
                .config
                .post_json("/embeddings", &options.headers, body)
                .await?;

            let parsed = OpenRouterEmbeddingResponse::from_json(&resp.body).inspect_err(|e| {
                tracing::warn!(error = %e, "embedding response failed validation");
            })?;

            if parsed.data.len() != options.values.len() {
                tracing::debug!(
                    expected = options.values.len(),
                    received = parsed.data.len(),
                    "embedding count differs from input count"
                );
            }

            let provider_metadata = cost_metadata(parsed.usage.as_ref());
            let usage = parsed.usage.as_ref().map(|u| EmbeddingUsage {
                tokens: u.total_tokens,
            });

            Ok(EmbedResult {
                embeddings: parsed.data.into_iter().map(|d| d.embedding).collect(),
                usage,
                provider_metadata,
                response: EmbedResponseInfo {
                    headers: resp.headers,
                    body: Some(resp.body),
                },
            })
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for OpenRouterEmbeddingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterEmbeddingModel")
            .field("model_id", &self.model_id)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_metadata_requires_cost() {
        assert!(cost_metadata(None).is_none());
        let no_cost = OpenRouterEmbeddingUsage {
            prompt_tokens: 1,
            total_tokens: 1,
            cost: None,
        };
        assert!(cost_metadata(Some(&no_cost)).is_none());
        let with_cost = OpenRouterEmbeddingUsage {
            cost: Some(0.25),
            ..no_cost
        };
        assert_eq!(
            cost_metadata(Some(&with_cost)).unwrap()["openrouter"],
            json!({"usage": {"cost": 0.25}})
        );
    }
}
