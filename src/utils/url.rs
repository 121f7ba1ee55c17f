//! URL helpers

use crate::error::LlmError;

/// Strip every trailing `/` from a base URL.
pub fn without_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Join a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        without_trailing_slash(base),
        path.trim_start_matches('/')
    )
}

/// Validate a base URL (absolute, http or https) and strip trailing slashes.
pub fn normalize_base_url(url: &str) -> Result<String, LlmError> {
    let trimmed = without_trailing_slash(url.trim());
    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|e| LlmError::ConfigurationError(format!("Invalid base URL '{url}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(LlmError::ConfigurationError(format!(
            "Invalid base URL '{url}': unsupported scheme '{other}'"
        ))),
    }
}
