use axum::http::{HeaderMap, HeaderValue, header};
use edrs_portal::{
    AppConfig, CookieSession, MemorySession, SessionStore,
    models::{RoleRecord, UserInfo},
    session::{SessionError, clear_cookie, encode_record, parse_cookies, set_cookie},
};

fn headers_with_cookie(cookie: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
    headers
}

#[test]
fn test_parse_cookies_splits_pairs() {
    let headers = headers_with_cookie("token=abc; userRole={\"code\":\"PM\"};theme=dark");
    let cookies = parse_cookies(&headers);
    assert_eq!(cookies.get("token").map(String::as_str), Some("abc"));
    assert_eq!(
        cookies.get("userRole").map(String::as_str),
        Some("{\"code\":\"PM\"}")
    );
    assert_eq!(cookies.get("theme").map(String::as_str), Some("dark"));
}

#[test]
fn test_parse_cookies_first_value_wins_across_headers() {
    let mut headers = HeaderMap::new();
    headers.append(header::COOKIE, HeaderValue::from_static("token=first"));
    headers.append(header::COOKIE, HeaderValue::from_static("token=second; a=b"));
    let cookies = parse_cookies(&headers);
    assert_eq!(cookies["token"], "first");
    assert_eq!(cookies["a"], "b");
}

#[test]
fn test_cookie_session_reads_configured_names() {
    let config = AppConfig::default();
    let headers = headers_with_cookie(
        "token=t-1; userRole={\"code\":\"ENGINEER\",\"description\":\"Site engineer\"}; \
         userInfo={\"email\":\"ada@example.com\",\"name\":\"Ada\"}",
    );
    let session = CookieSession::from_headers(&headers, &config);

    assert!(session.has_token());
    assert_eq!(session.token(), Some("t-1"));
    assert_eq!(
        session.role_record(),
        Some(RoleRecord::new("ENGINEER").with_description("Site engineer"))
    );
    assert_eq!(session.user_info().unwrap().display_name(), "Ada");
}

#[test]
fn test_cookie_session_custom_cookie_names() {
    let config = AppConfig {
        token_cookie: "edrs_token".to_string(),
        ..AppConfig::default()
    };
    let session = CookieSession::from_headers(&headers_with_cookie("token=x"), &config);
    assert!(!session.has_token());

    let session = CookieSession::from_headers(&headers_with_cookie("edrs_token=x"), &config);
    assert!(session.has_token());
}

#[test]
fn test_cookie_session_tolerates_malformed_records() {
    let config = AppConfig::default();
    let session =
        CookieSession::from_headers(&headers_with_cookie("token=t; userRole=%7Bbroken"), &config);
    assert!(session.role_record().is_none());
    assert_eq!(session.role_code(), "");
    assert!(session.user_info().is_none());
}

#[test]
fn test_empty_token_is_not_a_session() {
    let config = AppConfig::default();
    let session = CookieSession::from_headers(&headers_with_cookie("token="), &config);
    assert!(!session.has_token());
    assert!(!session.snapshot().authenticated);
}

#[test]
fn test_strict_parse_reports_malformed_record() {
    let err = RoleRecord::parse("{\"code\": 7}").unwrap_err();
    assert!(matches!(err, SessionError::Malformed { key: "role", .. }));
    assert!(err.to_string().starts_with("malformed session record 'role'"));
    assert!(RoleRecord::parse_lenient("{\"code\": 7}").is_none());
}

#[test]
fn test_encode_record_escapes_cookie_separator() {
    let role = RoleRecord::new("PM").with_description("Planning; scheduling");
    let value = encode_record(&role).unwrap();
    assert!(!value.contains(';'));

    // The escaped value still decodes to the original record.
    assert_eq!(RoleRecord::parse(&value).unwrap(), role);
}

#[test]
fn test_encode_record_is_ascii_for_non_ascii_text() {
    let user = UserInfo {
        email: "jose@example.com".to_string(),
        name: Some("Jos\u{e9} \u{1F477}".to_string()),
    };
    let value = encode_record(&user).unwrap();
    assert!(value.is_ascii());
    assert!(value.contains("\\u00e9"));
    // Characters outside the BMP become a surrogate pair.
    assert!(value.contains("\\ud83d\\udc77"));
    assert_eq!(UserInfo::parse(&value).unwrap(), user);
}

#[test]
fn test_non_utf8_cookie_pair_keeps_other_pairs() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_bytes(b"token=t-1; userInfo={\"name\":\"Jos\xc3\xa9\"}; junk=\xff")
            .unwrap(),
    );
    let session = CookieSession::from_headers(&headers, &AppConfig::default());

    assert!(session.has_token());
    assert_eq!(session.token(), Some("t-1"));
}

#[test]
fn test_set_and_clear_cookie_values() {
    assert_eq!(set_cookie("token", "abc"), "token=abc; Path=/; SameSite=Lax");
    assert!(clear_cookie("token").starts_with("token=;"));
    assert!(clear_cookie("token").contains("Max-Age=0"));
}

#[test]
fn test_memory_session_snapshot() {
    let user = UserInfo {
        email: "grace@example.com".to_string(),
        name: None,
    };
    let session = MemorySession::new()
        .with_token("t")
        .with_role("SA")
        .with_user(&user);
    let snapshot = session.snapshot();

    assert!(snapshot.authenticated);
    assert_eq!(snapshot.role, Some(RoleRecord::new("SA")));
    assert_eq!(snapshot.user.as_ref().map(UserInfo::display_name), Some("grace@example.com"));
}
