//! JSON import
//!
//! Accepted shapes:
//! - `{"headers": [...], "rows": [[...], ...]}`
//! - `[[...], [...]]` (first array is the header row)
//! - `[{...}, {...}]` (keys in first-seen order become headers)
//!
//! Scalar values are stringified; `null` becomes an empty cell.

use serde_json::{Map, Value};

use super::ImportError;
use crate::table::TabularData;

/// Parse JSON text into headers and rows
pub fn parse_json(content: &str) -> Result<TabularData, ImportError> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Object(map) if map.contains_key("headers") => {
            Ok(serde_json::from_value(Value::Object(map)).map_err(|e| {
                ImportError::Shape(format!("expected {{headers, rows}} of strings: {}", e))
            })?)
        }
        Value::Array(items) if items.is_empty() => Ok(TabularData::default()),
        Value::Array(items) if items.iter().all(Value::is_array) => from_arrays(items),
        Value::Array(items) if items.iter().all(Value::is_object) => Ok(from_objects(items)),
        Value::Array(_) => Err(ImportError::Shape(
            "array items must be all arrays or all objects".to_string(),
        )),
        other => Err(ImportError::Shape(format!(
            "expected an array or a {{headers, rows}} object, got {}",
            kind(&other)
        ))),
    }
}

fn from_arrays(items: Vec<Value>) -> Result<TabularData, ImportError> {
    let mut rows = items.into_iter().map(|item| match item {
        Value::Array(cells) => cells.iter().map(cell_text).collect::<Vec<_>>(),
        _ => Vec::new(),
    });
    let headers = rows.next().ok_or(ImportError::Empty)?;
    Ok(TabularData {
        headers,
        rows: rows.collect(),
    })
}

fn from_objects(items: Vec<Value>) -> TabularData {
    let objects: Vec<Map<String, Value>> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();

    let mut headers: Vec<String> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = objects
        .iter()
        .map(|object| {
            headers
                .iter()
                .map(|h| object.get(h).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    TabularData { headers, rows }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
