//! OpenRouter provider factory

use super::builder::OpenRouterBuilder;
use super::chat::OpenRouterChatLanguageModel;
use super::completion::OpenRouterCompletionLanguageModel;
use super::config::{OpenRouterConfig, OpenRouterProviderSettings, PROVIDER_ID};
use super::embedding::OpenRouterEmbeddingModel;
use super::settings::{
    Compatibility, LanguageModelSettings, OpenRouterChatSettings, OpenRouterCompletionSettings,
    OpenRouterEmbeddingSettings,
};
use crate::error::LlmError;
use crate::traits::{EmbeddingModelV2, LanguageModelV3, ProviderV3};
use crate::types::{GenerateResult, LanguageModelCallOptions};
use async_trait::async_trait;
use std::sync::Arc;

/// The only model id served by the completion endpoint when routing through
/// [`OpenRouterProvider::language_model`].
pub const COMPLETION_MODEL_ID: &str = "openai/gpt-3.5-turbo-instruct";

/// Factory for OpenRouter models.
///
/// Obtain one from [`create_openrouter`], [`OpenRouterBuilder`] or
/// [`openrouter`]. Cloning is cheap; all clones share one configuration.
#[derive(Clone, Debug)]
pub struct OpenRouterProvider {
    config: Arc<OpenRouterConfig>,
}

/// Create a provider, reading `OPENROUTER_API_KEY` when no key is given.
pub fn create_openrouter(
    settings: OpenRouterProviderSettings,
) -> Result<OpenRouterProvider, LlmError> {
    OpenRouterProvider::from_config(OpenRouterConfig::from_settings(settings)?)
}

/// Like [`create_openrouter`] with a caller-supplied environment lookup.
pub fn create_openrouter_with_env<F>(
    settings: OpenRouterProviderSettings,
    env: F,
) -> Result<OpenRouterProvider, LlmError>
where
    F: Fn(&str) -> Option<String>,
{
    OpenRouterProvider::from_config(OpenRouterConfig::from_settings_with_env(settings, env)?)
}

/// Default provider for openrouter.ai: strict compatibility, key from the environment.
pub fn openrouter() -> Result<OpenRouterProvider, LlmError> {
    create_openrouter(OpenRouterProviderSettings {
        compatibility: Some(Compatibility::Strict),
        ..Default::default()
    })
}

impl OpenRouterProvider {
    fn from_config(config: OpenRouterConfig) -> Result<Self, LlmError> {
        tracing::debug!(
            base_url = config.base_url(),
            compatibility = ?config.compatibility(),
            "openrouter provider created"
        );
        Ok(Self {
            config: Arc::new(config),
        })
    }

    pub fn builder() -> OpenRouterBuilder {
        OpenRouterBuilder::new()
    }

    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    fn create_language_model(
        &self,
        model_id: &str,
        settings: LanguageModelSettings,
    ) -> OpenRouterLanguageModel {
        if model_id == COMPLETION_MODEL_ID {
            OpenRouterLanguageModel::Completion(self.completion(model_id, settings.into_completion()))
        } else {
            OpenRouterLanguageModel::Chat(self.chat(model_id, settings.into_chat()))
        }
    }

    /// Direct entry point; same routing as [`Self::language_model`].
    pub fn model(
        &self,
        model_id: &str,
        settings: impl Into<LanguageModelSettings>,
    ) -> OpenRouterLanguageModel {
        self.create_language_model(model_id, settings.into())
    }

    /// Chat model, or the completion model for [`COMPLETION_MODEL_ID`].
    pub fn language_model(
        &self,
        model_id: &str,
        settings: impl Into<LanguageModelSettings>,
    ) -> OpenRouterLanguageModel {
        self.create_language_model(model_id, settings.into())
    }

    pub fn chat(&self, model_id: &str, settings: OpenRouterChatSettings) -> OpenRouterChatLanguageModel {
        OpenRouterChatLanguageModel::new(model_id, settings, Arc::clone(&self.config))
    }

    pub fn completion(
        &self,
        model_id: &str,
        settings: OpenRouterCompletionSettings,
    ) -> OpenRouterCompletionLanguageModel {
        OpenRouterCompletionLanguageModel::new(model_id, settings, Arc::clone(&self.config))
    }

    pub fn text_embedding_model(
        &self,
        model_id: &str,
        settings: OpenRouterEmbeddingSettings,
    ) -> OpenRouterEmbeddingModel {
        OpenRouterEmbeddingModel::new(model_id, settings, Arc::clone(&self.config))
    }

    #[deprecated(note = "use `text_embedding_model` instead")]
    pub fn embedding(
        &self,
        model_id: &str,
        settings: OpenRouterEmbeddingSettings,
    ) -> OpenRouterEmbeddingModel {
        self.text_embedding_model(model_id, settings)
    }

    /// Always fails: OpenRouter has no image generation endpoint here.
    pub fn image_model(&self, _model_id: &str) -> Result<(), LlmError> {
        Err(LlmError::UnsupportedOperation(
            "Image models are not yet supported by OpenRouter".to_string(),
        ))
    }
}

impl ProviderV3 for OpenRouterProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn language_model(&self, model_id: &str) -> Result<Box<dyn LanguageModelV3>, LlmError> {
        Ok(Box::new(self.create_language_model(
            model_id,
            LanguageModelSettings::default(),
        )))
    }

    fn text_embedding_model(&self, model_id: &str) -> Result<Box<dyn EmbeddingModelV2>, LlmError> {
        Ok(Box::new(OpenRouterProvider::text_embedding_model(
            self,
            model_id,
            OpenRouterEmbeddingSettings::default(),
        )))
    }

    fn image_model(&self, model_id: &str) -> Result<(), LlmError> {
        OpenRouterProvider::image_model(self, model_id)
    }
}

/// Result of [`OpenRouterProvider::language_model`].
#[derive(Clone, Debug)]
pub enum OpenRouterLanguageModel {
    Chat(OpenRouterChatLanguageModel),
    Completion(OpenRouterCompletionLanguageModel),
}

impl OpenRouterLanguageModel {
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion(_))
    }

    pub fn as_chat(&self) -> Option<&OpenRouterChatLanguageModel> {
        match self {
            Self::Chat(m) => Some(m),
            Self::Completion(_) => None,
        }
    }

    pub fn as_completion(&self) -> Option<&OpenRouterCompletionLanguageModel> {
        match self {
            Self::Completion(m) => Some(m),
            Self::Chat(_) => None,
        }
    }

    fn inner(&self) -> &dyn LanguageModelV3 {
        match self {
            Self::Chat(m) => m,
            Self::Completion(m) => m,
        }
    }
}

#[async_trait]
impl LanguageModelV3 for OpenRouterLanguageModel {
    fn provider(&self) -> &str {
        self.inner().provider()
    }

    fn model_id(&self) -> &str {
        self.inner().model_id()
    }

    async fn do_generate(
        &self,
        options: LanguageModelCallOptions,
    ) -> Result<GenerateResult, LlmError> {
        self.inner().do_generate(options).await
    }
}
