use super::*;

#[test]
fn check_username_endpoint_encodes_value() {
    assert_eq!(check_username_endpoint("alice"), "/accounts/check-username/?username=alice");
    assert_eq!(check_username_endpoint("a b&c"), "/accounts/check-username/?username=a+b%26c");
}

#[test]
fn parse_availability_reads_flag() {
    assert_eq!(parse_availability(r#"{"available": true}"#), Ok(true));
    assert_eq!(parse_availability(r#"{"available": false, "extra": 1}"#), Ok(false));
}

#[test]
fn parse_availability_rejects_bad_body() {
    assert!(matches!(parse_availability("<html>"), Err(AvailabilityError::Decode(_))));
    assert!(matches!(parse_availability("{}"), Err(AvailabilityError::Decode(_))));
}

#[test]
fn refresh_failed_message_formats_status() {
    assert_eq!(refresh_failed_message(500), "뉴스 새로고침에 실패했습니다. (500)");
}

#[test]
fn refresh_request_carries_keywords() {
    let body = serde_json::to_value(RefreshRequest { keywords: REFRESH_KEYWORDS }).unwrap();
    assert_eq!(body, serde_json::json!({"keywords": ["금융", "경제", "투자"]}));
}

#[test]
fn parse_refresh_success_returns_message() {
    let body = r#"{"success": true, "message": "총 30개 중 4개 새로 저장됨", "saved_count": 4, "total_count": 30}"#;
    assert_eq!(parse_refresh(body), Ok("총 30개 중 4개 새로 저장됨".to_owned()));
}

#[test]
fn parse_refresh_failure_in_ok_response_is_an_error() {
    let body = r#"{"success": false, "message": "오류 발생: Expecting value"}"#;
    assert_eq!(parse_refresh(body), Err("오류 발생: Expecting value".to_owned()));
}

#[test]
fn parse_refresh_failure_without_message_gets_generic_text() {
    assert_eq!(parse_refresh(r#"{"success": false}"#), Err("뉴스 새로고침에 실패했습니다.".to_owned()));
}

#[test]
fn parse_refresh_rejects_non_json() {
    let err = parse_refresh("<html>").unwrap_err();
    assert!(err.starts_with("뉴스 새로고침 응답을 읽을 수 없습니다."));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_checker_reports_unavailable() {
    let outcome = futures::executor::block_on(HttpAvailability.check_username_available("alice"));
    assert!(matches!(outcome, Err(AvailabilityError::Request(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_refresh_reports_unavailable() {
    assert!(futures::executor::block_on(refresh_news("token")).is_err());
}
