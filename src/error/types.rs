//! Core error types

use thiserror::Error;

/// Kind of mismatch found while validating a provider response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A required field was absent.
    MissingField,
    /// A field was present but had the wrong JSON type.
    WrongType,
    /// A field had the right type but an unexpected value (e.g. a literal tag).
    UnexpectedValue,
    /// An embedding vector element could not be coerced to a number.
    NonNumericElement,
    /// An embedding vector element is a finite number outside the `f32` range.
    OutOfRange,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::MissingField => "missing field",
            Self::WrongType => "wrong type",
            Self::UnexpectedValue => "unexpected value",
            Self::NonNumericElement => "non-numeric element",
            Self::OutOfRange => "out of range",
        };
        f.write_str(s)
    }
}

/// Coarse error classification, useful for presentation and policy decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Unsupported,
    Validation,
    Network,
    Authentication,
    RateLimit,
    Client,
    Server,
    Parsing,
}

/// Unified error type for the OpenRouter provider.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// Invalid or missing configuration (API key, base URL, headers).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The requested operation is not available on this provider or model.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The caller passed input that cannot be mapped to a vendor request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP call itself failed (DNS, connect, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The vendor answered with a non-success status or an error envelope.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// The response body was not valid JSON.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The response body was valid JSON but did not match the expected shape.
    #[error("Response validation error at `{path}` ({issue}): {message}")]
    ResponseValidationError {
        path: String,
        issue: ValidationIssue,
        message: String,
    },
}

impl LlmError {
    /// Build an API error without details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Build an API error carrying the vendor error body.
    pub fn api_error_with_details(
        code: u16,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: Some(details),
        }
    }

    /// Build a response validation error.
    pub fn validation(
        path: impl Into<String>,
        issue: ValidationIssue,
        message: impl Into<String>,
    ) -> Self {
        Self::ResponseValidationError {
            path: path.into(),
            issue,
            message: message.into(),
        }
    }

    /// HTTP status code, when the error came from an HTTP response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::UnsupportedOperation(_) => ErrorCategory::Unsupported,
            Self::InvalidInput(_) => ErrorCategory::Validation,
            Self::HttpError(_) => ErrorCategory::Network,
            Self::JsonError(_) | Self::ResponseValidationError { .. } => ErrorCategory::Parsing,
            Self::ApiError { code, .. } => match *code {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// This layer never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::RateLimit | ErrorCategory::Server
        )
    }
}
