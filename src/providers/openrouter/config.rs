//! OpenRouter provider configuration
//!
//! `OpenRouterProviderSettings` is the plain input accepted by
//! [`super::create_openrouter`]. It is resolved once into an immutable
//! [`OpenRouterConfig`] that every model shares through an `Arc`.

use super::settings::Compatibility;
use crate::error::LlmError;
use crate::execution::http::{
    HttpHeaderBuilder, HttpRequestContext, HttpTransport, JsonResponse, ReqwestTransport,
    execute_json_request,
};
use crate::types::HttpConfig;
use crate::utils::{get_api_key_with_lookup, join_url, normalize_base_url};
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::sync::Arc;

/// Provider id reported by every OpenRouter model.
pub const PROVIDER_ID: &str = "openrouter";
/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Environment variable consulted when no API key is given.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Input settings for [`super::create_openrouter`].
#[derive(Clone, Default)]
pub struct OpenRouterProviderSettings {
    /// Defaults to [`DEFAULT_BASE_URL`]; trailing slashes are removed.
    pub base_url: Option<String>,
    /// Falls back to `OPENROUTER_API_KEY`.
    pub api_key: Option<String>,
    /// Sent with every request; overrides computed defaults.
    pub headers: HashMap<String, String>,
    /// Defaults to [`Compatibility::Compatible`].
    pub compatibility: Option<Compatibility>,
    /// Custom transport ("fetch"); defaults to a reqwest client.
    pub transport: Option<Arc<dyn HttpTransport>>,
    /// Merged into every request body.
    pub extra_body: Option<serde_json::Map<String, serde_json::Value>>,
    /// Only used to build the default transport.
    pub http_config: HttpConfig,
}

impl std::fmt::Debug for OpenRouterProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterProviderSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("compatibility", &self.compatibility)
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .field("extra_body", &self.extra_body)
            .field("http_config", &self.http_config)
            .finish()
    }
}

/// Resolved, immutable provider configuration.
pub struct OpenRouterConfig {
    api_key: SecretString,
    base_url: String,
    headers: HashMap<String, String>,
    compatibility: Compatibility,
    transport: Arc<dyn HttpTransport>,
    extra_body: serde_json::Map<String, serde_json::Value>,
}

impl OpenRouterConfig {
    /// Resolve settings, reading the API key from the process environment if needed.
    pub fn from_settings(settings: OpenRouterProviderSettings) -> Result<Self, LlmError> {
        Self::from_settings_with_env(settings, |name| std::env::var(name).ok())
    }

    /// Resolve settings with a caller-supplied environment lookup.
    pub fn from_settings_with_env<F>(
        settings: OpenRouterProviderSettings,
        env: F,
    ) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get_api_key_with_lookup(settings.api_key, API_KEY_ENV, "OpenRouter", env)?;
        let base_url = normalize_base_url(settings.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        // Catch bad header names/values at construction instead of on first call.
        HttpHeaderBuilder::new().with_custom_headers(&settings.headers)?;

        let transport: Arc<dyn HttpTransport> = match settings.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::from_config(&settings.http_config)?),
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url,
            headers: settings.headers,
            compatibility: settings.compatibility.unwrap_or_default(),
            transport,
            extra_body: settings.extra_body.unwrap_or_default(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn compatibility(&self) -> Compatibility {
        self.compatibility
    }

    pub fn extra_body(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra_body
    }

    pub(crate) fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Final request headers: auth and content type, then provider headers,
    /// then per-call headers, then the library user-agent suffix.
    pub(crate) fn request_headers(
        &self,
        per_call: &HashMap<String, String>,
    ) -> Result<HeaderMap, LlmError> {
        Ok(HttpHeaderBuilder::new()
            .with_bearer_auth(self.api_key.expose_secret())?
            .with_json_content_type()
            .with_custom_headers(&self.headers)?
            .with_custom_headers(per_call)?
            .with_user_agent_suffix(&user_agent_suffix())?
            .build())
    }

    /// POST `body` to `{base_url}{path}` through the configured transport.
    pub(crate) async fn post_json(
        &self,
        path: &str,
        per_call_headers: &HashMap<String, String>,
        body: serde_json::Value,
    ) -> Result<JsonResponse, LlmError> {
        let url = self.url(path);
        let headers = self.request_headers(per_call_headers)?;
        let ctx = HttpRequestContext::new(PROVIDER_ID, url);
        execute_json_request(self.transport.as_ref(), ctx, headers, body).await
    }
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("base_url", &self.base_url)
            .field("compatibility", &self.compatibility)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// `siumai/openrouter/<crate version>`
pub fn user_agent_suffix() -> String {
    format!("siumai/{PROVIDER_ID}/{}", crate::VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, USER_AGENT};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn settings_with_key() -> OpenRouterProviderSettings {
        OpenRouterProviderSettings {
            api_key: Some("sk-test".into()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults() {
        let cfg = OpenRouterConfig::from_settings_with_env(settings_with_key(), no_env).unwrap();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.compatibility(), Compatibility::Compatible);
        assert!(cfg.extra_body().is_empty());
        assert_eq!(cfg.url("/embeddings"), "https://openrouter.ai/api/v1/embeddings");
    }

    #[test]
    fn api_key_from_environment() {
        let cfg = OpenRouterConfig::from_settings_with_env(Default::default(), |name| {
            (name == API_KEY_ENV).then(|| "sk-env".to_string())
        })
        .unwrap();
        let headers = cfg.request_headers(&HashMap::new()).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer sk-env");
    }

    #[test]
    fn missing_api_key_fails_at_construction() {
        let err = OpenRouterConfig::from_settings_with_env(Default::default(), no_env).unwrap_err();
        match err {
            LlmError::ConfigurationError(msg) => assert!(msg.contains(API_KEY_ENV)),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn invalid_header_fails_at_construction() {
        let mut settings = settings_with_key();
        settings.headers.insert("bad header".into(), "x".into());
        assert!(matches!(
            OpenRouterConfig::from_settings_with_env(settings, no_env),
            Err(LlmError::ConfigurationError(_))
        ));
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let cfg = OpenRouterConfig::from_settings_with_env(settings_with_key(), no_env).unwrap();
        assert!(!format!("{cfg:?}").contains("sk-test"));
        assert!(!format!("{:?}", settings_with_key()).contains("sk-test"));
    }

    #[test]
    fn user_agent_carries_suffix() {
        let cfg = OpenRouterConfig::from_settings_with_env(settings_with_key(), no_env).unwrap();
        let headers = cfg.request_headers(&HashMap::new()).unwrap();
        assert_eq!(headers.get(USER_AGENT).unwrap().to_str().unwrap(), user_agent_suffix());
    }
}
