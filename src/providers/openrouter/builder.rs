//! `OpenRouter` Builder Implementation

use super::config::OpenRouterProviderSettings;
use super::provider::{OpenRouterProvider, create_openrouter, create_openrouter_with_env};
use super::settings::Compatibility;
use crate::error::LlmError;
use crate::execution::http::HttpTransport;
use crate::types::HttpConfig;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// `OpenRouter` provider builder.
#[derive(Clone, Debug, Default)]
pub struct OpenRouterBuilder {
    settings: OpenRouterProviderSettings,
}

impl OpenRouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.settings.api_key = Some(api_key.into());
        self
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.settings.base_url = Some(base_url.into());
        self
    }

    pub fn compatibility(mut self, compatibility: Compatibility) -> Self {
        self.settings.compatibility = Some(compatibility);
        self
    }

    /// Shorthand for `compatibility(Compatibility::Strict)`.
    pub fn strict(self) -> Self {
        self.compatibility(Compatibility::Strict)
    }

    pub fn custom_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.settings.headers.extend(headers);
        self
    }

    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.settings.headers.insert(key.into(), value.into());
        self
    }

    /// Replace the provider-level extra body.
    pub fn extra_body(mut self, body: serde_json::Map<String, serde_json::Value>) -> Self {
        self.settings.extra_body = Some(body);
        self
    }

    /// Add one field to the provider-level extra body.
    pub fn extra_body_field<K: Into<String>>(mut self, key: K, value: serde_json::Value) -> Self {
        self.settings
            .extra_body
            .get_or_insert_with(Default::default)
            .insert(key.into(), value);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.http_config.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.settings.http_config.connect_timeout = Some(timeout);
        self
    }

    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.settings.http_config = config;
        self
    }

    pub fn with_http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.settings.transport = Some(transport);
        self
    }

    /// Alias for `with_http_transport(...)` (Vercel-aligned: `fetch`).
    pub fn fetch(self, transport: Arc<dyn HttpTransport>) -> Self {
        self.with_http_transport(transport)
    }

    pub fn build(self) -> Result<OpenRouterProvider, LlmError> {
        create_openrouter(self.settings)
    }

    /// Build with a caller-supplied environment lookup for the API key fallback.
    pub fn build_with_env<F>(self, env: F) -> Result<OpenRouterProvider, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        create_openrouter_with_env(self.settings, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_collects_settings() {
        let provider = OpenRouterBuilder::new()
            .api_key("sk-test")
            .base_url("https://gateway.example.com/v1/")
            .strict()
            .header("X-Title", "my app")
            .extra_body_field("transforms", json!(["middle-out"]))
            .timeout(Duration::from_secs(30))
            .build_with_env(|_| None)
            .unwrap();

        let cfg = provider.config();
        assert_eq!(cfg.base_url(), "https://gateway.example.com/v1");
        assert_eq!(cfg.compatibility(), Compatibility::Strict);
        assert_eq!(cfg.extra_body()["transforms"], json!(["middle-out"]));
    }

    #[test]
    fn builder_without_key_fails() {
        assert!(matches!(
            OpenRouterBuilder::new().build_with_env(|_| None),
            Err(LlmError::ConfigurationError(_))
        ));
    }

    #[test]
    fn invalid_base_url_fails() {
        assert!(matches!(
            OpenRouterBuilder::new()
                .api_key("k")
                .base_url("not a url")
                .build_with_env(|_| None),
            Err(LlmError::ConfigurationError(_))
        ));
    }
}
