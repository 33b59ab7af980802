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
fn session_deserializes_full_login_body() {
    let body = r#"{"token":"fake-jwt-token","type":"Bearer","id":1,"username":"testuser","email":"test@email.com","roles":["ROLE_USER"]}"#;
    let session: Session = serde_json::from_str(body).unwrap();
    assert_eq!(session, sample_session());
}

#[test]
fn session_tolerates_missing_token_and_roles() {
    let body = r#"{"username":"testuser"}"#;
    let session: Session = serde_json::from_str(body).unwrap();
    assert!(session.token.is_none());
    assert_eq!(session.token_type, "Bearer");
    assert!(session.roles.is_empty());
}

#[test]
fn session_round_trips_through_json() {
    let session = sample_session();
    let raw = serde_json::to_string(&session).unwrap();
    assert_eq!(serde_json::from_str::<Session>(&raw).unwrap(), session);
}

#[test]
fn identity_drops_the_credential() {
    let identity = sample_session().identity();
    let raw = serde_json::to_string(&identity).unwrap();
    assert!(!raw.contains("token"));
    assert_eq!(identity.username, "testuser");
    assert_eq!(identity.roles, vec!["ROLE_USER".to_owned()]);
}

#[test]
fn is_admin_requires_the_admin_role() {
    let mut identity = sample_session().identity();
    assert!(!identity.is_admin());

    identity.roles.push(ADMIN_ROLE.to_owned());
    assert!(identity.is_admin());
}

#[test]
fn auth_check_defaults_to_unauthenticated() {
    let check: AuthCheck = serde_json::from_str("{}").unwrap();
    assert!(!check.authenticated);
    assert!(check.username.is_none());
}

#[test]
fn auth_check_accepts_extra_profile_fields() {
    let body = r#"{"id":1,"username":"testuser","email":"test@email.com","roles":["ROLE_USER"],"authenticated":true}"#;
    let check: AuthCheck = serde_json::from_str(body).unwrap();
    assert!(check.authenticated);
    assert_eq!(check.username.as_deref(), Some("testuser"));
}
