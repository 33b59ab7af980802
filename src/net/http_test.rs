use super::*;

#[test]
fn base_url_for_localhost() {
    assert_eq!(base_url_for_host("localhost"), "http://localhost:8080/api");
}

#[test]
fn base_url_for_loopback_ip_uses_localhost() {
    assert_eq!(base_url_for_host("127.0.0.1"), "http://localhost:8080/api");
}

#[test]
fn base_url_for_lan_host_reuses_hostname() {
    assert_eq!(base_url_for_host("192.168.0.12"), "http://192.168.0.12:8080/api");
}

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("fake-jwt-token"), "Bearer fake-jwt-token");
}

#[test]
fn error_message_prefers_server_message() {
    assert_eq!(
        error_message(401, r#"{"message":"Credenciais inválidas"}"#),
        "Credenciais inválidas"
    );
}

#[test]
fn error_message_falls_back_on_non_json_body() {
    assert_eq!(error_message(500, "<html>boom</html>"), "request failed: 500");
}

#[test]
fn error_message_falls_back_when_message_field_missing() {
    assert_eq!(error_message(400, r#"{"error":"nope"}"#), "request failed: 400");
}

#[test]
fn is_unauthorized_matches_only_401() {
    assert!(is_unauthorized(401));
    assert!(!is_unauthorized(403));
    assert!(!is_unauthorized(500));
}
