//! Open provider options map (Vercel-aligned)
//!
//! A provider-id keyed JSON map used as a pass-through channel for
//! provider-specific request fields. For OpenRouter, the `"openrouter"` entry
//! is merged into the outgoing request body.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provider-id keyed JSON map.
///
/// - Key: provider id (e.g. `"openrouter"`)
/// - Value: provider-specific JSON object (recommended), but any JSON value is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderOptionsMap(pub BTreeMap<String, serde_json::Value>);

impl ProviderOptionsMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert provider options under `provider_id`.
    ///
    /// Provider ids are normalized to lowercase for consistency.
    pub fn insert(&mut self, provider_id: impl AsRef<str>, value: serde_json::Value) {
        self.0
            .insert(provider_id.as_ref().to_ascii_lowercase(), value);
    }

    /// Get provider options for `provider_id`.
    pub fn get(&self, provider_id: impl AsRef<str>) -> Option<&serde_json::Value> {
        self.0.get(&provider_id.as_ref().to_ascii_lowercase())
    }

    /// Get provider options for `provider_id` as a JSON object.
    pub fn get_object(
        &self,
        provider_id: impl AsRef<str>,
    ) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.get(provider_id)?.as_object()
    }
}

/// Provider-id keyed metadata returned alongside results.
///
/// OpenRouter writes its entry under `"openrouter"`.
pub type ProviderMetadata = BTreeMap<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_ids_are_case_insensitive() {
        let mut map = ProviderOptionsMap::new();
        map.insert("OpenRouter", json!({"transforms": ["middle-out"]}));
        assert!(map.get("openrouter").is_some());
        assert_eq!(
            map.get_object("OPENROUTER")
                .and_then(|o| o.get("transforms"))
                .cloned(),
            Some(json!(["middle-out"]))
        );
    }

    #[test]
    fn non_object_values_are_not_objects() {
        let mut map = ProviderOptionsMap::new();
        map.insert("openrouter", json!(true));
        assert!(map.get("openrouter").is_some());
        assert!(map.get_object("openrouter").is_none());
    }
}
