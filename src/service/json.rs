use serde_json::{Map, Number, Value};

const TRUE_LITERALS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_LITERALS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// Result of sniffing a string with [`parse_json`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Object(Map<String, Value>),
    Integer(i64),
    Boolean(bool),
    Float(f64),
}

impl ParsedValue {
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn into_value(self) -> Value {
        match self {
            ParsedValue::Object(map) => Value::Object(map),
            ParsedValue::Integer(n) => Value::Number(n.into()),
            ParsedValue::Boolean(b) => Value::Bool(b),
            ParsedValue::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        }
    }
}

impl From<ParsedValue> for Value {
    fn from(parsed: ParsedValue) -> Self {
        parsed.into_value()
    }
}

/// Sniffs `input` as a JSON object, then a decimal integer, then a boolean
/// literal, then a float. Anything else (including JSON arrays, strings and
/// `null`) gives `None`.
pub fn parse_json(input: Option<&str>) -> Option<ParsedValue> {
    let text = input.unwrap_or_default();

    if let Ok(map) = serde_json::from_str::<Map<String, Value>>(text) {
        return Some(ParsedValue::Object(map));
    }

    if let Ok(n) = text.parse::<i64>() {
        return Some(ParsedValue::Integer(n));
    }

    if let Some(b) = parse_bool(text) {
        return Some(ParsedValue::Boolean(b));
    }

    if let Ok(f) = text.parse::<f64>() {
        return Some(ParsedValue::Float(f));
    }

    tracing::debug!("parse_json could not classify input of {} bytes", text.len());
    None
}

fn parse_bool(text: &str) -> Option<bool> {
    if TRUE_LITERALS.contains(&text) {
        Some(true)
    } else if FALSE_LITERALS.contains(&text) {
        Some(false)
    } else {
        None
    }
}
