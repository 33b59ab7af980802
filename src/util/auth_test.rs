use super::*;
use crate::net::types::UserIdentity;

fn signed_in_state() -> AuthState {
    AuthState {
        user: Some(UserIdentity {
            id: Some(1),
            username: "testuser".to_owned(),
            email: None,
            roles: vec!["ROLE_USER".to_owned()],
        }),
        loading: false,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_unauth_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_unauth_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in_state()));
}

#[test]
fn should_redirect_auth_when_user_exists() {
    assert!(should_redirect_auth(&signed_in_state()));
}

#[test]
fn should_not_redirect_auth_while_loading() {
    let mut state = signed_in_state();
    state.loading = true;
    assert!(!should_redirect_auth(&state));
}

#[test]
fn should_not_redirect_auth_when_signed_out() {
    let state = AuthState { user: None, loading: false };
    assert!(!should_redirect_auth(&state));
}
