//! JSON POST executor
//!
//! One attempt per call: send through the transport, classify non-2xx
//! statuses, parse the body.

use super::errors::classify_http_error;
use super::headers::headermap_to_hashmap;
use super::transport::{HttpRequestContext, HttpTransport, HttpTransportRequest};
use crate::error::LlmError;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::collections::HashMap;

/// Parsed 2xx JSON response.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: serde_json::Value,
}

pub async fn execute_json_request(
    transport: &dyn HttpTransport,
    ctx: HttpRequestContext,
    headers: HeaderMap,
    body: serde_json::Value,
) -> Result<JsonResponse, LlmError> {
    let url = ctx.url.clone();
    tracing::debug!(
        provider = %ctx.provider_id,
        request_id = %ctx.request_id,
        url = %url,
        "sending request"
    );

    let resp = transport
        .execute_json(HttpTransportRequest {
            ctx: ctx.clone(),
            url,
            headers,
            body,
        })
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, error = %e, "transport failed");
        })?;

    tracing::debug!(
        request_id = %ctx.request_id,
        status = resp.status,
        bytes = resp.body.len(),
        "response received"
    );

    let text = String::from_utf8_lossy(&resp.body);

    if !(200..300).contains(&resp.status) {
        let reason = StatusCode::from_u16(resp.status)
            .ok()
            .and_then(|s| s.canonical_reason());
        let error = classify_http_error(resp.status, &text, reason);
        tracing::warn!(request_id = %ctx.request_id, status = resp.status, error = %error, "request failed");
        return Err(error);
    }

    let body: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        tracing::warn!(request_id = %ctx.request_id, error = %e, "malformed JSON response");
        LlmError::from(e)
    })?;

    Ok(JsonResponse {
        status: resp.status,
        headers: headermap_to_hashmap(&resp.headers),
        body,
    })
}
