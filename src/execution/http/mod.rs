//! HTTP Utilities
//!
//! This module contains HTTP-related utilities:
//! - HTTP client configuration
//! - Header management
//! - The injectable JSON transport
//! - Error classification and the JSON POST executor

pub mod client;
pub mod errors;
pub mod executor;
pub mod headers;
pub mod transport;

pub use client::build_http_client_from_config;
pub use errors::classify_http_error;
pub use executor::{JsonResponse, execute_json_request};
pub use headers::{HttpHeaderBuilder, headermap_to_hashmap};
pub use transport::{
    HttpRequestContext, HttpTransport, HttpTransportRequest, HttpTransportResponse,
    ReqwestTransport,
};
