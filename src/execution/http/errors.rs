//! HTTP error classification

use crate::error::LlmError;

/// Turn a non-2xx response into [`LlmError::ApiError`].
///
/// The message comes from the vendor body (`{"error":{"message":..}}`, or a
/// plain string `error`) when present, otherwise from `fallback_message`
/// (usually the HTTP reason phrase). A JSON body is kept as `details`.
pub fn classify_http_error(
    status: u16,
    body_text: &str,
    fallback_message: Option<&str>,
) -> LlmError {
    let parsed = serde_json::from_str::<serde_json::Value>(body_text).ok();

    let vendor_message = parsed.as_ref().and_then(|v| {
        let err = v.get("error")?;
        err.get("message")
            .and_then(|m| m.as_str())
            .or_else(|| err.as_str())
            .map(str::to_string)
    });

    let message = vendor_message
        .or_else(|| fallback_message.map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {status}"));

    match parsed {
        Some(details) => LlmError::api_error_with_details(status, message, details),
        None => LlmError::api_error(status, message),
    }
}
