//! Language model contract

use super::SpecificationVersion;
use crate::error::LlmError;
use crate::types::{GenerateResult, LanguageModelCallOptions};
use async_trait::async_trait;

/// Host-facing contract for text generation models.
#[async_trait]
pub trait LanguageModelV3: Send + Sync {
    fn specification_version(&self) -> SpecificationVersion {
        SpecificationVersion::V3
    }

    /// Provider identifier (e.g. `"openrouter"`)
    fn provider(&self) -> &str;

    /// Model identifier passed at construction
    fn model_id(&self) -> &str;

    /// Run a single non-streaming generation.
    async fn do_generate(
        &self,
        options: LanguageModelCallOptions,
    ) -> Result<GenerateResult, LlmError>;
}
