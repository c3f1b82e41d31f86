// 供產生的 SDK client 程式碼呼叫的無狀態輔助函式

pub mod assert;
pub mod body;
pub mod convert;
pub mod form;
pub mod header;
pub mod json;
pub mod model;
pub mod optional;
pub mod status;

pub use assert::{
    assert_as_boolean, assert_as_map, assert_as_number, assert_as_string, try_as_boolean,
    try_as_map, try_as_number, try_as_string,
};
pub use body::{
    read_as_bytes, read_as_json, read_as_string, read_response_as_bytes, read_response_as_json,
    read_response_as_string,
};
pub use convert::{
    anyify_map_value, stringify_map_value, to_bytes, to_json_string, to_map, to_string,
};
pub use form::to_form_string;
pub use header::{
    format_http_date, get_date_utc_string, get_nonce, get_user_agent, DEFAULT_USER_AGENT,
};
pub use json::{parse_json, ParsedValue};
pub use model::validate_model;
pub use optional::{
    default_number, default_string, empty, equal_number, equal_string, is_unset, is_unset_value,
};
pub use status::{is_2xx, is_3xx, is_4xx, is_5xx, StatusClass};
