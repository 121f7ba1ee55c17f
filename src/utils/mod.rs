//! Utility functions shared by provider builders and models

pub mod api_key;
pub mod url;

pub use api_key::{get_api_key_with_env, get_api_key_with_lookup};
pub use url::{join_url, normalize_base_url, without_trailing_slash};
