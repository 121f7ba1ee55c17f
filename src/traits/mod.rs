//! Host SDK contracts implemented by provider models

pub mod embedding;
pub mod language_model;
pub mod provider;

pub use embedding::EmbeddingModelV2;
pub use language_model::LanguageModelV3;
pub use provider::ProviderV3;

/// Contract revision a model implements; lets the host pick the matching
/// invocation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecificationVersion {
    V2,
    V3,
}

impl SpecificationVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

impl std::fmt::Display for SpecificationVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
