use url_checker_ms::domain::{CheckRequest, CheckResponse};
use std::collections::HashMap;

#[test]
fn request_decodes_urls_field() {
    let request: CheckRequest =
        serde_json::from_str(r#"{"urls":["http://example.com/a","not a url"]}"#).unwrap();
    assert_eq!(request.urls, vec!["http://example.com/a", "not a url"]);
}

#[test]
fn response_carries_url_codes() {
    let mut codes = HashMap::new();
    codes.insert("http://example.com/a".to_string(), 200u16);
    let json = serde_json::to_string(&CheckResponse::codes(codes)).unwrap();
    assert_eq!(json, r#"{"url_codes":{"http://example.com/a":200}}"#);
}

#[test]
fn empty_map_and_absent_error_are_omitted() {
    let json = serde_json::to_string(&CheckResponse::codes(HashMap::new())).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn error_response_carries_the_message_only() {
    let json = serde_json::to_string(&CheckResponse::error("expected value at line 1")).unwrap();
    assert_eq!(json, r#"{"error":"expected value at line 1"}"#);
}
