//! Embedding model contract

use super::SpecificationVersion;
use crate::error::LlmError;
use crate::types::{EmbedOptions, EmbedResult};
use async_trait::async_trait;

#[async_trait]
pub trait EmbeddingModelV2: Send + Sync {
    fn specification_version(&self) -> SpecificationVersion {
        SpecificationVersion::V2
    }

    fn provider(&self) -> &str;

    fn model_id(&self) -> &str;

    /// Upper bound on values per `do_embed` call; `None` means no known limit.
    fn max_embeddings_per_call(&self) -> Option<usize> {
        None
    }

    fn supports_parallel_calls(&self) -> bool {
        true
    }

    async fn do_embed(&self, options: EmbedOptions) -> Result<EmbedResult, LlmError>;
}
