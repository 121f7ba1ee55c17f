//! HTTP transport abstraction.
//!
//! A provider or model can be given a "custom fetch": an injectable
//! transport that observes the final URL, headers and body and may return a
//! synthetic response without going through `reqwest`.

use crate::error::LlmError;
use crate::types::HttpConfig;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

use super::client::build_http_client_from_config;

/// Per-request identification passed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequestContext {
    pub provider_id: String,
    /// Random id generated for every logical call
    pub request_id: String,
    pub url: String,
}

impl HttpRequestContext {
    pub fn new(provider_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            request_id: uuid::Uuid::new_v4().to_string(),
            url: url.into(),
        }
    }
}

/// Transport-level request data for JSON POST requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub ctx: HttpRequestContext,
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Custom HTTP transport for JSON requests.
///
/// Only non-streaming JSON POST requests go through this trait. Non-2xx
/// statuses are returned as responses, not errors; classification happens
/// in the executor.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, LlmError> {
        Ok(Self::new(build_http_client_from_config(config)?))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError> {
        let resp = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}
