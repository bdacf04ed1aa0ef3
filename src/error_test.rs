use super::*;

// =============================================================================
// status_code — all variants
// =============================================================================

#[test]
fn upstream_status_is_relayed() {
    let err = ProxyError::UpstreamStatus { status: 422, body: "{}".into() };
    assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let err = ProxyError::UpstreamStatus { status: 503, body: String::new() };
    assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn invalid_or_success_upstream_status_becomes_bad_gateway() {
    let err = ProxyError::UpstreamStatus { status: 42, body: String::new() };
    assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);

    let err = ProxyError::UpstreamStatus { status: 200, body: String::new() };
    assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
}

#[test]
fn transport_and_parse_failures_are_bad_gateway() {
    assert_eq!(ProxyError::UpstreamRequest("refused".into()).status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::UpstreamParse("eof".into()).status_code(), StatusCode::BAD_GATEWAY);
}

#[test]
fn local_failures_are_internal() {
    assert_eq!(ProxyError::ConfigParse("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ProxyError::HttpClientBuild("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_messages() {
    assert_eq!(
        ProxyError::UpstreamStatus { status: 500, body: String::new() }.to_string(),
        "upstream response error: status 500"
    );
    assert_eq!(ProxyError::UpstreamRequest("timeout".into()).to_string(), "upstream request failed: timeout");
}

#[test]
fn into_response_uses_status_code() {
    let resp = ProxyError::UpstreamParse("bad".into()).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
