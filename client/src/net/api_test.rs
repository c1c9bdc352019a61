use super::*;

#[test]
fn endpoints_use_route_segments() {
    assert_eq!(collection_endpoint(ContentKind::Faq), "/api/content/faqs");
    assert_eq!(collection_endpoint(ContentKind::Legal), "/api/content/legal");
    assert_eq!(item_endpoint(ContentKind::Blog, "abc"), "/api/content/blog/abc");
}

#[test]
fn decode_error_prefers_server_json() {
    let body = r#"{"code":"conflict","message":"duplicate key value violates unique constraint"}"#;
    let err = decode_error(409, body);
    assert_eq!(err.code, ErrorKind::Conflict);
    assert_eq!(err.message, "duplicate key value violates unique constraint");
}

#[test]
fn decode_error_falls_back_to_status() {
    let err = decode_error(502, "<html>Bad Gateway</html>");
    assert_eq!(err.code, ErrorKind::Transient);
    assert_eq!(err.message, "request failed: 502");
    assert_eq!(decode_error(409, "").code, ErrorKind::Conflict);
    assert_eq!(decode_error(401, "").code, ErrorKind::Unauthorized);
    assert_eq!(decode_error(418, "").code, ErrorKind::Unknown);
}

#[test]
fn network_error_is_transient() {
    let err = network_error("connection reset");
    assert_eq!(err.code, ErrorKind::Transient);
    assert_eq!(err.message, "network error: connection reset");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_fail_without_panicking() {
    let api = HttpApi;
    let err = futures::executor::block_on(api.list(ContentKind::Blog)).unwrap_err();
    assert_eq!(err.code, ErrorKind::Unknown);
    assert!(futures::executor::block_on(api.get_session()).is_err());
}
