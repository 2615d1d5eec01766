use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, SubvocabError};
use super::VocabPair;

/// Object keys that may wrap the pair list, tried in order
const LIST_KEYS: [&str; 2] = ["vocabulary", "words"];

/// Where the pair list was found in a completion response
#[derive(Debug)]
enum ResponseShape<'a> {
    /// The response is the list itself
    Bare(&'a [Value]),
    /// The list sits under one of [`LIST_KEYS`]
    Keyed(&'static str, &'a [Value]),
}

/// Parse a completion response into vocabulary pairs.
///
/// Accepts a bare JSON array, or an object carrying the array under
/// `vocabulary` or `words`. Elements with neither `original` nor `word` are
/// skipped; any other malformed element rejects the whole response.
pub fn parse_vocab_response(raw: &str) -> Result<Vec<VocabPair>> {
    let value = parse_json(raw)?;
    let shape = classify(&value)?;

    let items = match shape {
        ResponseShape::Bare(items) => items,
        ResponseShape::Keyed(key, items) => {
            debug!("Vocabulary list found under '{}'", key);
            items
        }
    };

    let mut pairs = Vec::new();
    for item in items {
        let obj = item.as_object().ok_or_else(|| {
            SubvocabError::Extraction(format!("List element is not an object: {}", item))
        })?;
        if let Some(pair) = pair_from_object(obj)? {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

fn parse_json(raw: &str) -> Result<Value> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            let unfenced = strip_code_fence(raw);
            if unfenced.len() != raw.trim().len() {
                if let Ok(value) = serde_json::from_str(unfenced) {
                    return Ok(value);
                }
            }
            Err(SubvocabError::Extraction(format!("Response is not valid JSON: {}", e)))
        }
    }
}

fn classify(value: &Value) -> Result<ResponseShape<'_>> {
    match value {
        Value::Array(items) => Ok(ResponseShape::Bare(items)),
        Value::Object(map) => {
            for key in LIST_KEYS {
                if let Some(inner) = map.get(key) {
                    return inner
                        .as_array()
                        .map(|items| ResponseShape::Keyed(key, items.as_slice()))
                        .ok_or_else(|| {
                            SubvocabError::Extraction(format!("'{}' is not a list", key))
                        });
                }
            }
            Err(SubvocabError::Extraction(format!(
                "Unrecognized response object with keys: {}",
                map.keys().cloned().collect::<Vec<_>>().join(", ")
            )))
        }
        other => Err(SubvocabError::Extraction(format!(
            "Unrecognized response type: {}",
            json_type_name(other)
        ))),
    }
}

/// `Ok(None)` when the element carries no original-like value at all.
fn pair_from_object(obj: &Map<String, Value>) -> Result<Option<VocabPair>> {
    let Some(original) = ["original", "word"]
        .iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| is_truthy(value))
    else {
        return Ok(None);
    };

    let original = original.as_str().ok_or_else(|| {
        SubvocabError::Extraction(format!("Original is not a string: {}", original))
    })?;
    let translation = obj.get("translation").and_then(Value::as_str).ok_or_else(|| {
        SubvocabError::Extraction(format!("Missing or non-string translation for '{}'", original))
    })?;

    Ok(Some(VocabPair::new(original, translation)))
}

/// JSON truthiness: null, false, zero and empty strings/arrays/objects are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Strip a surrounding markdown code fence such as ```json ... ```
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    match rest.find('\n') {
        Some(newline) => rest[newline + 1..].trim(),
        None => rest.trim(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
