use super::*;

fn sample_session() -> Session {
    Session {
        token: Some("fake-jwt-token".to_owned()),
        token_type: "Bearer".to_owned(),
        id: Some(1),
        username: "testuser".to_owned(),
        email: Some("test@email.com".to_owned()),
        roles: vec!["ROLE_USER".to_owned()],
    }
}

#[test]
fn encode_then_decode_round_trips() {
    let session = sample_session();
    let raw = encode(&session).unwrap();
    assert_eq!(decode(&raw), Some(session));
}

#[test]
fn decode_rejects_malformed_data() {
    assert_eq!(decode("invalid-json"), None);
}

#[test]
fn decode_rejects_wrong_shape() {
    assert_eq!(decode(r#"{"roles":[]}"#), None);
}

#[test]
fn decode_accepts_the_raw_login_body() {
    let body = r#"{"token":"fake-jwt-token","type":"Bearer","id":1,"username":"testuser","email":"test@email.com","roles":["ROLE_USER"]}"#;
    assert_eq!(decode(body), Some(sample_session()));
}
