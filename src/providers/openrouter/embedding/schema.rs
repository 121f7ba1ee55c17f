//! Embedding response schema
//!
//! OpenRouter forwards embeddings from many upstream providers, and not all
//! of them encode a vector as a JSON array of numbers. A vector may arrive
//! as:
//!
//! - an array of numbers: `[0.1, 0.2]`
//! - an array containing numeric strings: `["0.1", 0.2]`
//! - an object keyed by index: `{"1": 0.2, "0": 0.1}`
//!
//! [`RawEmbedding`] classifies the wire value and [`RawEmbedding::into_vector`]
//! coerces it into a dense `Vec<f32>` ordered by index.

use crate::error::{LlmError, ValidationIssue};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a wire embedding could not be normalized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("embedding must be an array or an object with numeric keys, got {found}")]
    UnsupportedEncoding { found: &'static str },
    #[error("element {position} is not a finite number")]
    NonNumericElement { position: usize },
    #[error("element {position} ({value}) exceeds the f32 range")]
    OutOfRange { position: usize, value: f64 },
}

/// An embedding vector as found on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEmbedding {
    /// Array of JSON numbers
    Dense(Vec<f64>),
    /// Array with at least one non-number element (usually numeric strings)
    Tokens(Vec<Value>),
    /// Non-empty object whose keys all parse as numbers
    Keyed(Map<String, Value>),
}

impl TryFrom<Value> for RawEmbedding {
    type Error = VectorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let dense: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();
                Ok(match dense {
                    Some(d) => Self::Dense(d),
                    None => Self::Tokens(items),
                })
            }
            Value::Object(map) if !map.is_empty() && map.keys().all(|k| parse_number(k).is_some()) => {
                Ok(Self::Keyed(map))
            }
            other => Err(VectorError::UnsupportedEncoding {
                found: json_kind(&other),
            }),
        }
    }
}

impl RawEmbedding {
    /// Dense vector in index order. Fails on the first element that is not a
    /// finite number (after string coercion) or whose magnitude overflows an
    /// `f32`. Values below `f32` precision round toward zero.
    pub fn into_vector(self) -> Result<Vec<f32>, VectorError> {
        match self {
            Self::Dense(values) => values
                .into_iter()
                .enumerate()
                .map(|(position, v)| to_f32(v, position))
                .collect(),
            Self::Tokens(values) => coerce_all(values),
            Self::Keyed(map) => {
                // Keys were validated on construction.
                let mut entries: Vec<(f64, Value)> = map
                    .into_iter()
                    .filter_map(|(k, v)| parse_number(&k).map(|idx| (idx, v)))
                    .collect();
                entries.sort_by(|a, b| a.0.total_cmp(&b.0));
                coerce_all(entries.into_iter().map(|(_, v)| v).collect())
            }
        }
    }

    /// Number of elements the vector will have.
    pub fn len(&self) -> usize {
        match self {
            Self::Dense(v) => v.len(),
            Self::Tokens(v) => v.len(),
            Self::Keyed(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn coerce_all(values: Vec<Value>) -> Result<Vec<f32>, VectorError> {
    values
        .iter()
        .enumerate()
        .map(|(position, v)| {
            let n = match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => parse_number(s),
                _ => None,
            }
            .ok_or(VectorError::NonNumericElement { position })?;
            to_f32(n, position)
        })
        .collect()
}

fn to_f32(v: f64, position: usize) -> Result<f32, VectorError> {
    if !v.is_finite() {
        return Err(VectorError::NonNumericElement { position });
    }
    let narrowed = v as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(VectorError::OutOfRange { position, value: v })
    }
}

/// Trimmed, non-empty, finite decimal number.
fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(m) if m.is_empty() => "empty object",
        Value::Object(_) => "object with non-numeric keys",
    }
}

/// `usage` object of an embedding response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenRouterEmbeddingUsage {
    pub prompt_tokens: u64,
    pub total_tokens: u64,
    pub cost: Option<f64>,
}

/// One validated record of `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenRouterEmbeddingData {
    pub embedding: Vec<f32>,
    /// Informational; output order follows the `data` array.
    pub index: Option<f64>,
}

/// Validated embedding response.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenRouterEmbeddingResponse {
    pub id: Option<String>,
    pub data: Vec<OpenRouterEmbeddingData>,
    pub model: String,
    pub usage: Option<OpenRouterEmbeddingUsage>,
}

impl OpenRouterEmbeddingResponse {
    /// Validate a parsed JSON body. Any invalid record fails the whole response.
    pub fn from_json(body: &Value) -> Result<Self, LlmError> {
        let root = body.as_object().ok_or_else(|| {
            LlmError::validation("", ValidationIssue::WrongType, "expected a JSON object")
        })?;

        expect_literal(root, "object", "list", "object")?;

        let model = required(root, "model", "model")?
            .as_str()
            .ok_or_else(|| wrong_type("model", "expected a string"))?
            .to_string();

        let id = match root.get("id") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(wrong_type("id", "expected a string")),
        };

        let usage = match root.get("usage") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(
                OpenRouterEmbeddingUsage::deserialize(raw)
                    .map_err(|e| wrong_type("usage", e.to_string()))?,
            ),
        };

        let data = required(root, "data", "data")?
            .as_array()
            .ok_or_else(|| wrong_type("data", "expected an array"))?
            .iter()
            .enumerate()
            .map(|(i, record)| parse_record(record, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            data,
            model,
            usage,
        })
    }
}

fn parse_record(record: &Value, i: usize) -> Result<OpenRouterEmbeddingData, LlmError> {
    let path = format!("data[{i}]");
    let obj = record
        .as_object()
        .ok_or_else(|| wrong_type(&path, "expected an object"))?;

    expect_literal(obj, "object", "embedding", &format!("{path}.object"))?;

    let index = match obj.get("index") {
        None | Some(Value::Null) => None,
        Some(v) => Some(
            v.as_f64()
                .ok_or_else(|| wrong_type(format!("{path}.index"), "expected a number"))?,
        ),
    };

    let embedding_path = format!("{path}.embedding");
    let raw = required(obj, "embedding", &embedding_path)?.clone();
    let embedding = RawEmbedding::try_from(raw)
        .and_then(RawEmbedding::into_vector)
        .map_err(|e| match e {
            VectorError::UnsupportedEncoding { .. } => {
                LlmError::validation(&embedding_path, ValidationIssue::WrongType, e.to_string())
            }
            VectorError::NonNumericElement { position } => LlmError::validation(
                format!("{embedding_path}[{position}]"),
                ValidationIssue::NonNumericElement,
                e.to_string(),
            ),
            VectorError::OutOfRange { position, .. } => LlmError::validation(
                format!("{embedding_path}[{position}]"),
                ValidationIssue::OutOfRange,
                e.to_string(),
            ),
        })?;

    Ok(OpenRouterEmbeddingData { embedding, index })
}

fn required<'a>(obj: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a Value, LlmError> {
    obj.get(key).ok_or_else(|| {
        LlmError::validation(path, ValidationIssue::MissingField, format!("missing field `{key}`"))
    })
}

fn expect_literal(
    obj: &Map<String, Value>,
    key: &str,
    expected: &str,
    path: &str,
) -> Result<(), LlmError> {
    match required(obj, key, path)?.as_str() {
        Some(s) if s == expected => Ok(()),
        _ => Err(LlmError::validation(
            path,
            ValidationIssue::UnexpectedValue,
            format!("expected \"{expected}\""),
        )),
    }
}

fn wrong_type(path: impl Into<String>, message: impl Into<String>) -> LlmError {
    LlmError::validation(path, ValidationIssue::WrongType, message)
}
