//! Error handling types for the OpenRouter provider.
//!
//! # Example
//!
//! ```rust,ignore
//! use siumai_provider_openrouter::error::{ErrorCategory, LlmError};
//!
//! let error = LlmError::api_error(404, "Not found");
//! assert_eq!(error.category(), ErrorCategory::Client);
//! assert!(!error.is_retryable());
//! ```

mod conversions;
pub mod types;

pub use types::*;
