//! Provider implementations

pub mod openrouter;
