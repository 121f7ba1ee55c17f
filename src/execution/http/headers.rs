//! HTTP Headers Utility
//!
//! Header construction shared by every OpenRouter model.

use crate::error::LlmError;
use reqwest::header::{
    AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};
use std::collections::HashMap;

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, LlmError> {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| LlmError::ConfigurationError(format!("Invalid API key format: {e}")))?;
        auth_value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, auth_value);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Add multiple custom headers; existing entries with the same name are replaced.
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, LlmError> {
        for (key, value) in custom_headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid header name '{key}': {e}"))
            })?;
            self.headers.insert(
                header_name,
                HeaderValue::from_str(value).map_err(|e| {
                    LlmError::ConfigurationError(format!("Invalid header value '{value}': {e}"))
                })?,
            );
        }
        Ok(self)
    }

    /// Append `suffix` to the current user agent (or set it when none exists).
    pub fn with_user_agent_suffix(mut self, suffix: &str) -> Result<Self, LlmError> {
        let merged = match self.headers.get(USER_AGENT).and_then(|v| v.to_str().ok()) {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {suffix}"),
            _ => suffix.to_string(),
        };
        self.headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&merged)
                .map_err(|e| LlmError::ConfigurationError(format!("Invalid user agent: {e}")))?,
        );
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert reqwest HeaderMap to HashMap<String, String>
///
/// Invalid UTF-8 header values are filtered out. Keys are lowercase.
pub fn headermap_to_hashmap(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(k, v)| {
            v.to_str()
                .ok()
                .map(|v_str| (k.as_str().to_string(), v_str.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builder() {
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth("test-token")
            .unwrap()
            .with_json_content_type()
            .with_user_agent_suffix("test-agent")
            .unwrap()
            .build();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-token");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(USER_AGENT).unwrap(), "test-agent");
    }

    #[test]
    fn custom_headers_override_defaults_case_insensitively() {
        let mut extra = HashMap::new();
        extra.insert("authorization".to_string(), "Bearer other".to_string());
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth("test-token")
            .unwrap()
            .with_custom_headers(&extra)
            .unwrap()
            .build();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer other");
    }

    #[test]
    fn user_agent_suffix_is_appended_to_existing_value() {
        let mut extra = HashMap::new();
        extra.insert("User-Agent".to_string(), "my-app/1.0".to_string());
        let headers = HttpHeaderBuilder::new()
            .with_custom_headers(&extra)
            .unwrap()
            .with_user_agent_suffix("siumai/openrouter/0.0.0")
            .unwrap()
            .build();
        assert_eq!(
            headers.get(USER_AGENT).unwrap(),
            "my-app/1.0 siumai/openrouter/0.0.0"
        );
    }

    #[test]
    fn invalid_header_name_is_a_configuration_error() {
        let mut extra = HashMap::new();
        extra.insert("bad header".to_string(), "x".to_string());
        let err = HttpHeaderBuilder::new()
            .with_custom_headers(&extra)
            .err()
            .expect("error");
        assert!(matches!(err, LlmError::ConfigurationError(_)));
    }
}
