use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  testuser  ", "password123"),
        Ok(("testuser".to_owned(), "password123".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(validate_login_input("   ", "password123"), Err("Informe usuário e senha."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("testuser", ""), Err("Informe usuário e senha."));
}

#[test]
fn password_input_type_toggles_visibility() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}
