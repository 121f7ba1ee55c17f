//! Embedding call types

use super::provider_options::ProviderMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Options for a single `do_embed` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedOptions {
    /// Input texts to embed
    pub values: Vec<String>,
    /// Per-call HTTP headers (override provider headers)
    pub headers: HashMap<String, String>,
}

impl EmbedOptions {
    /// Create options for the given input texts
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            headers: HashMap::new(),
        }
    }

    /// Add a per-call header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Token usage reported for an embedding call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingUsage {
    pub tokens: u64,
}

/// Raw response information kept for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct EmbedResponseInfo {
    /// Response headers (lowercased keys)
    pub headers: HashMap<String, String>,
    /// Parsed response body
    pub body: Option<serde_json::Value>,
}

/// Result of an embedding call.
#[derive(Debug, Clone)]
pub struct EmbedResult {
    /// One canonical vector per input, in response order
    pub embeddings: Vec<Vec<f32>>,
    /// `None` when the vendor did not report usage
    pub usage: Option<EmbeddingUsage>,
    /// `None` when the vendor reported nothing provider-specific
    pub provider_metadata: Option<ProviderMetadata>,
    pub response: EmbedResponseInfo,
}

impl EmbedResult {
    /// Get the number of embeddings
    pub fn count(&self) -> usize {
        self.embeddings.len()
    }

    /// Get the dimension of embeddings (assumes all have same dimension)
    pub fn dimension(&self) -> Option<usize> {
        self.embeddings.first().map(|e| e.len())
    }
}
