use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub fn to_bytes(s: Option<&str>) -> Vec<u8> {
    s.unwrap_or_default().as_bytes().to_vec()
}

pub fn to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// 序列化失敗時回傳空字串
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!("to_json_string fell back to empty string: {}", e);
            String::new()
        }
    }
}

/// String values pass through, null entries are dropped, everything else
/// becomes compact JSON.
pub fn stringify_map_value(map: &Map<String, Value>) -> HashMap<String, String> {
    map.iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), rendered))
        })
        .collect()
}

pub fn anyify_map_value(map: &HashMap<String, Option<String>>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            (
                key.clone(),
                Value::String(value.clone().unwrap_or_default()),
            )
        })
        .collect()
}

/// Serializes a struct into a JSON object map. Absent input, serialization
/// failures and non-object shapes all give `None`.
pub fn to_map<T: Serialize>(value: Option<&T>) -> Option<Map<String, Value>> {
    let value = value?;
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            tracing::debug!("to_map ignored non-object value: {}", other);
            None
        }
        Err(e) => {
            tracing::debug!("to_map failed to serialize value: {}", e);
            None
        }
    }
}
