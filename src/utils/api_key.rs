//! API key resolution
//!
//! Priority: explicit parameter > environment variable.

use crate::error::LlmError;

/// Resolve an API key from an explicit value or the process environment.
///
/// # Example
/// ```rust,ignore
/// let api_key = get_api_key_with_env(None, "OPENROUTER_API_KEY", "OpenRouter")?;
/// ```
pub fn get_api_key_with_env(
    api_key: Option<String>,
    env_name: &str,
    provider_name: &str,
) -> Result<String, LlmError> {
    get_api_key_with_lookup(api_key, env_name, provider_name, |name| {
        std::env::var(name).ok()
    })
}

/// Same as [`get_api_key_with_env`] with a caller-supplied environment lookup.
///
/// Empty values (explicit or from the environment) count as missing.
pub fn get_api_key_with_lookup<F>(
    api_key: Option<String>,
    env_name: &str,
    provider_name: &str,
    lookup: F,
) -> Result<String, LlmError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = api_key
        && !key.trim().is_empty()
    {
        return Ok(key);
    }

    if let Some(v) = lookup(env_name)
        && !v.trim().is_empty()
    {
        return Ok(v);
    }

    Err(LlmError::ConfigurationError(format!(
        "API key is required for {provider_name} (missing {env_name} environment variable or explicit .api_key())"
    )))
}
