use super::*;

fn identity(roles: &[&str]) -> UserIdentity {
    UserIdentity {
        id: Some(1),
        username: "testuser".to_owned(),
        email: Some("test@email.com".to_owned()),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    }
}

#[test]
fn starts_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn authenticated_when_user_present() {
    let state = AuthState {
        user: Some(identity(&["ROLE_USER"])),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn admin_requires_admin_role() {
    let state = AuthState {
        user: Some(identity(&["ROLE_USER", "ROLE_ADMIN"])),
        loading: false,
    };
    assert!(state.is_admin());
}

#[test]
fn session_invalid_without_check_result() {
    assert!(!session_still_valid(None));
}

#[test]
fn session_invalid_on_negative_check() {
    let check = AuthCheck {
        authenticated: false,
        username: None,
    };
    assert!(!session_still_valid(Some(&check)));
}

#[test]
fn session_valid_on_positive_check() {
    let check = AuthCheck {
        authenticated: true,
        username: Some("testuser".to_owned()),
    };
    assert!(session_still_valid(Some(&check)));
}
