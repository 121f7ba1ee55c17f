//! Shared test transport: records every request and replies with a canned response.

#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use siumai_provider_openrouter::execution::http::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse,
};
use siumai_provider_openrouter::{LlmError, OpenRouterProvider, OpenRouterProviderSettings};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<HttpTransportRequest>>>,
    status: u16,
    body: Vec<u8>,
}

impl RecordingTransport {
    pub fn json(body: serde_json::Value) -> Self {
        Self::raw(200, body.to_string())
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            status,
            body: body.into().into_bytes(),
        }
    }

    pub fn calls(&self) -> Vec<HttpTransportRequest> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn last(&self) -> HttpTransportRequest {
        self.calls().pop().expect("at least one request")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError> {
        self.calls.lock().expect("lock").push(request);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(HttpTransportResponse {
            status: self.status,
            headers,
            body: self.body.clone(),
        })
    }
}

/// Provider wired to `transport` with a fixed key and no environment.
pub fn provider_with(
    transport: &RecordingTransport,
    settings: OpenRouterProviderSettings,
) -> OpenRouterProvider {
    let transport: Arc<dyn HttpTransport> = Arc::new(transport.clone());
    siumai_provider_openrouter::providers::openrouter::create_openrouter_with_env(
        OpenRouterProviderSettings {
            api_key: settings.api_key.or_else(|| Some("test-key".to_string())),
            transport: Some(transport),
            ..settings
        },
        |_| None,
    )
    .expect("provider")
}

pub fn header(req: &HttpTransportRequest, name: &str) -> Option<String> {
    req.headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
