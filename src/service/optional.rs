use serde_json::Value;

/// 有值時回傳實際值，否則回傳預設值
pub fn default_string<'a>(real: Option<&'a str>, default: Option<&'a str>) -> Option<&'a str> {
    real.or(default)
}

pub fn default_number(real: Option<i64>, default: Option<i64>) -> Option<i64> {
    real.or(default)
}

/// `None` 與 `""` 都視為空
pub fn empty(val: Option<&str>) -> bool {
    val.map_or(true, str::is_empty)
}

pub fn equal_string(val1: Option<&str>, val2: Option<&str>) -> bool {
    val1.unwrap_or_default() == val2.unwrap_or_default()
}

pub fn equal_number(val1: Option<i64>, val2: Option<i64>) -> bool {
    val1.unwrap_or_default() == val2.unwrap_or_default()
}

/// Absent or equal to the type's zero value.
pub fn is_unset<T: Default + PartialEq>(val: Option<&T>) -> bool {
    val.map_or(true, |v| *v == T::default())
}

pub fn is_unset_value(val: &Value) -> bool {
    match val {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_string() {
        assert_eq!(default_string(Some("real"), Some("fallback")), Some("real"));
        assert_eq!(default_string(None, Some("fallback")), Some("fallback"));
        assert_eq!(default_string(None, None), None);
        // 空字串仍然是「有值」
        assert_eq!(default_string(Some(""), Some("fallback")), Some(""));
    }

    #[test]
    fn test_default_number() {
        assert_eq!(default_number(Some(0), Some(10)), Some(0));
        assert_eq!(default_number(None, Some(10)), Some(10));
        assert_eq!(default_number(None, None), None);
    }

    #[test]
    fn test_empty() {
        assert!(empty(None));
        assert!(empty(Some("")));
        assert!(!empty(Some(" ")));
        assert!(!empty(Some("value")));
    }

    #[test]
    fn test_equal_string_and_number() {
        assert!(equal_string(Some("a"), Some("a")));
        assert!(!equal_string(Some("a"), Some("b")));
        assert!(equal_string(None, Some("")));
        assert!(equal_string(None, None));

        assert!(equal_number(Some(7), Some(7)));
        assert!(!equal_number(Some(7), Some(8)));
        assert!(equal_number(None, Some(0)));
    }

    #[test]
    fn test_is_unset() {
        assert!(is_unset::<String>(None));
        assert!(is_unset(Some(&String::new())));
        assert!(!is_unset(Some(&"x".to_string())));
        assert!(is_unset(Some(&0i64)));
        assert!(!is_unset(Some(&-1i64)));
        assert!(is_unset(Some(&false)));
    }

    #[test]
    fn test_is_unset_value() {
        assert!(is_unset_value(&Value::Null));
        assert!(is_unset_value(&json!("")));
        assert!(is_unset_value(&json!(0)));
        assert!(is_unset_value(&json!(0.0)));
        assert!(is_unset_value(&json!(false)));
        assert!(is_unset_value(&json!([])));
        assert!(is_unset_value(&json!({})));

        assert!(!is_unset_value(&json!("a")));
        assert!(!is_unset_value(&json!(1)));
        assert!(!is_unset_value(&json!(true)));
        assert!(!is_unset_value(&json!([0])));
        assert!(!is_unset_value(&json!({"k": null})));
    }
}
