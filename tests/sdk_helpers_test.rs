use serde::Serialize;
use serde_json::{json, Value};
use tea_util::{
    assert_as_map, assert_as_number, assert_as_string, default_string, empty, get_user_agent,
    parse_json, stringify_map_value, to_form_string, to_map, ParsedValue, DEFAULT_USER_AGENT,
};
use url::form_urlencoded;

#[derive(Serialize)]
struct DescribeInstancesRequest {
    #[serde(rename = "RegionId")]
    region_id: String,
    #[serde(rename = "InstanceName")]
    instance_name: String,
    #[serde(rename = "PageSize")]
    page_size: i64,
}

/// 模擬產生的 client：struct -> map -> query string
#[test]
fn test_request_struct_to_query_string() {
    let request = DescribeInstancesRequest {
        region_id: "cn-hangzhou".to_string(),
        instance_name: "web server #1".to_string(),
        page_size: 50,
    };

    let map = to_map(Some(&request)).unwrap();
    let query = to_form_string(Some(&map));
    assert_eq!(
        query,
        "InstanceName=web+server+%231&PageSize=50&RegionId=cn-hangzhou"
    );

    let decoded: std::collections::HashMap<String, String> =
        form_urlencoded::parse(query.as_bytes()).into_owned().collect();
    let stringified = stringify_map_value(&map);
    assert_eq!(decoded, stringified);
}

#[test]
fn test_response_handling_with_assertions() {
    let body = parse_json(Some(r#"{"TotalCount": 2, "RequestId": "req-1"}"#))
        .map(ParsedValue::into_value)
        .unwrap();

    let map = assert_as_map(&body);
    assert_eq!(assert_as_number(&map["TotalCount"]), 2);
    assert_eq!(assert_as_string(&map["RequestId"]), "req-1");
}

#[test]
fn test_parse_json_priority_is_deterministic() {
    let inputs = ["{}", "10", "true", "1.5", "[]", "nope"];
    let first: Vec<Option<Value>> = inputs
        .iter()
        .map(|s| parse_json(Some(*s)).map(ParsedValue::into_value))
        .collect();
    let second: Vec<Option<Value>> = inputs
        .iter()
        .map(|s| parse_json(Some(*s)).map(ParsedValue::into_value))
        .collect();

    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            Some(json!({})),
            Some(json!(10)),
            Some(json!(true)),
            Some(json!(1.5)),
            None,
            None
        ]
    );
}

#[test]
fn test_user_agent_with_defaults() {
    let custom: Option<&str> = None;
    let ua = get_user_agent(default_string(custom, Some("Terraform/1.6")));
    assert_eq!(ua, format!("{} Terraform/1.6", *DEFAULT_USER_AGENT));

    assert!(empty(Some("")));
    assert_eq!(get_user_agent(Some("")), DEFAULT_USER_AGENT.as_str());
}
