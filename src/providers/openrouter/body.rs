//! Request body assembly helpers

use crate::error::LlmError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Copy every key of `source` into `target`, replacing existing keys.
pub(crate) fn merge_object(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (k, v) in source {
        target.insert(k.clone(), v.clone());
    }
}

/// Insert `value` under `key` when it is `Some`.
pub(crate) fn insert_opt<T: Serialize>(
    target: &mut Map<String, Value>,
    key: &str,
    value: Option<T>,
) -> Result<(), LlmError> {
    if let Some(v) = value {
        target.insert(key.to_string(), serde_json::to_value(v)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn later_source_wins() {
        let mut target = json!({"a": 1, "b": 1}).as_object().cloned().unwrap();
        let source = json!({"b": 2, "c": 3}).as_object().cloned().unwrap();
        merge_object(&mut target, &source);
        assert_eq!(Value::Object(target), json!({"a": 1, "b": 2, "c": 3}));
    }

    #[test]
    fn none_is_omitted() {
        let mut target = Map::new();
        insert_opt::<u32>(&mut target, "max_tokens", None).unwrap();
        insert_opt(&mut target, "user", Some("u")).unwrap();
        assert_eq!(Value::Object(target), json!({"user": "u"}));
    }
}
