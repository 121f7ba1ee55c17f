//! Provider Trait
//!
//! A provider is a lightweight factory for model instances. It owns the
//! provider-level configuration (API key, base URL, headers, transport) and
//! hands it to every model it creates. It never performs HTTP itself.

use super::{EmbeddingModelV2, LanguageModelV3, SpecificationVersion};
use crate::error::LlmError;

/// Generic provider factory.
///
/// Endpoints a provider does not implement fail with
/// [`LlmError::UnsupportedOperation`] instead of panicking.
pub trait ProviderV3: Send + Sync {
    fn specification_version(&self) -> SpecificationVersion {
        SpecificationVersion::V3
    }

    /// Provider identifier (e.g. "openrouter")
    fn id(&self) -> &str;

    /// Create a language model with default settings.
    fn language_model(&self, model_id: &str) -> Result<Box<dyn LanguageModelV3>, LlmError>;

    /// Create a text embedding model with default settings.
    fn text_embedding_model(
        &self,
        _model_id: &str,
    ) -> Result<Box<dyn EmbeddingModelV2>, LlmError> {
        Err(LlmError::UnsupportedOperation(format!(
            "Text embedding models are not supported by {}",
            self.id()
        )))
    }

    /// Image generation is not part of this contract yet; always fails by default.
    fn image_model(&self, _model_id: &str) -> Result<(), LlmError> {
        Err(LlmError::UnsupportedOperation(format!(
            "Image models are not yet supported by {}",
            self.id()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenerateResult, LanguageModelCallOptions};

    struct ChatOnly;

    struct NullModel;

    #[async_trait::async_trait]
    impl LanguageModelV3 for NullModel {
        fn provider(&self) -> &str {
            "chat-only"
        }
        fn model_id(&self) -> &str {
            "m"
        }
        async fn do_generate(
            &self,
            _options: LanguageModelCallOptions,
        ) -> Result<GenerateResult, LlmError> {
            Err(LlmError::UnsupportedOperation("null".into()))
        }
    }

    impl ProviderV3 for ChatOnly {
        fn id(&self) -> &str {
            "chat-only"
        }
        fn language_model(&self, _model_id: &str) -> Result<Box<dyn LanguageModelV3>, LlmError> {
            Ok(Box::new(NullModel))
        }
    }

    #[test]
    fn provider_without_embeddings_fails_explicitly() {
        let err = ChatOnly.text_embedding_model("any").err().expect("error");
        match err {
            LlmError::UnsupportedOperation(msg) => {
                assert_eq!(msg, "Text embedding models are not supported by chat-only")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn image_models_fail_by_default() {
        assert!(matches!(
            ChatOnly.image_model("dall-e"),
            Err(LlmError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn default_versions() {
        assert_eq!(ChatOnly.specification_version(), SpecificationVersion::V3);
        let model = ChatOnly.language_model("m").expect("model");
        assert_eq!(model.specification_version(), SpecificationVersion::V3);
    }
}
