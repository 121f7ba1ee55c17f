//! HTTP client builder

use crate::error::LlmError;
use crate::types::HttpConfig;

/// Build a `reqwest::Client` from [`HttpConfig`].
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, LlmError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| LlmError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| LlmError::HttpError(format!("Failed to create HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn builds_with_timeouts() {
        let config = HttpConfig::builder()
            .timeout(Some(Duration::from_secs(30)))
            .connect_timeout(Some(Duration::from_secs(5)))
            .build();
        assert!(build_http_client_from_config(&config).is_ok());
    }

    #[test]
    fn invalid_proxy_is_a_configuration_error() {
        let config = HttpConfig::builder().proxy(Some("::not a proxy::")).build();
        match build_http_client_from_config(&config) {
            Err(LlmError::ConfigurationError(msg)) => assert!(msg.contains("proxy")),
            Err(other) => panic!("unexpected error variant: {other:?}"),
            Ok(_) => panic!("expected an error"),
        }
    }
}
