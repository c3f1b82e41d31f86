use serde_json::{Map, Value};
use url::form_urlencoded;

/// Encodes a map as `application/x-www-form-urlencoded` (space as `+`).
///
/// Pairs are emitted in key order. Strings are written raw, `null` as an empty
/// value, and arrays/objects as compact JSON.
pub fn to_form_string(map: Option<&Map<String, Value>>) -> String {
    let Some(map) = map else {
        return String::new();
    };

    // Map 的迭代順序取決於 serde_json 的 preserve_order feature，這裡自行排序
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in entries {
        serializer.append_pair(key, &form_value(value));
    }
    serializer.finish()
}

fn form_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
