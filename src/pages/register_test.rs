use super::*;

#[test]
fn validate_register_input_trims_fields() {
    assert_eq!(
        validate_register_input(" newuser ", " new@email.com ", "password123"),
        Ok(("newuser".to_owned(), "new@email.com".to_owned(), "password123".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(
        validate_register_input("", "new@email.com", "password123"),
        Err("Informe usuário, email e senha.")
    );
    assert_eq!(
        validate_register_input("newuser", "", "password123"),
        Err("Informe usuário, email e senha.")
    );
    assert_eq!(
        validate_register_input("newuser", "new@email.com", ""),
        Err("Informe usuário, email e senha.")
    );
}

#[test]
fn validate_register_input_rejects_address_without_at() {
    assert_eq!(
        validate_register_input("newuser", "not-an-email", "password123"),
        Err("Informe um email válido.")
    );
}
